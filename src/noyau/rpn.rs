// src/noyau/rpn.rs
//
// Répartition des opérations sur la pile
// --------------------------------------
// - Binaires : Y op X, résultat en X, la pile descend (T selon réglage)
// - Unaires  : X seulement, Y/Z/T intacts
// - Toutes les opérations de calcul arment l’élévation de pile
// - Aucune erreur : NaN / ±∞ sont des résultats comme les autres

use tracing::debug;

use super::eval::EtatCalc;
use super::jetons::Touche;
use super::reglages::{OrdrePuissance, UniteAngle};
use super::trig::{trig, TrigFn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Binaire {
    pub fn depuis_touche(t: Touche) -> Option<Self> {
        Some(match t {
            Touche::Plus => Binaire::Plus,
            Touche::Moins => Binaire::Moins,
            Touche::Fois => Binaire::Fois,
            Touche::Divise => Binaire::Divise,
            Touche::Puissance => Binaire::Puissance,
            _ => return None,
        })
    }

    pub fn calculer(self, y: f64, x: f64, ordre: OrdrePuissance) -> f64 {
        match self {
            Binaire::Plus => y + x,
            Binaire::Moins => y - x,
            Binaire::Fois => y * x,
            Binaire::Divise => y / x,
            Binaire::Puissance => match ordre {
                OrdrePuissance::BaseX => x.powf(y),
                OrdrePuissance::BaseY => y.powf(x),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unaire {
    Racine,
    Inverse,
    Log,
    Ln,
    Exp,
    Trig(TrigFn),
}

impl Unaire {
    pub fn depuis_touche(t: Touche) -> Option<Self> {
        Some(match t {
            Touche::Racine => Unaire::Racine,
            Touche::Inverse => Unaire::Inverse,
            Touche::Log => Unaire::Log,
            Touche::Ln => Unaire::Ln,
            Touche::Exp => Unaire::Exp,
            Touche::Sin => Unaire::Trig(TrigFn::Sin),
            Touche::Cos => Unaire::Trig(TrigFn::Cos),
            Touche::Tan => Unaire::Trig(TrigFn::Tan),
            _ => return None,
        })
    }

    /// `arc` n’a d’effet que sur la famille trig.
    pub fn calculer(self, x: f64, arc: bool, unite: UniteAngle) -> f64 {
        match self {
            Unaire::Racine => x.sqrt(),
            Unaire::Inverse => 1.0 / x,
            Unaire::Log => x.log10(),
            Unaire::Ln => x.ln(),
            Unaire::Exp => x.exp(),
            Unaire::Trig(f) => trig(f, x, arc, unite),
        }
    }
}

impl EtatCalc {
    /// Touche validante : la saisie est déjà close, `litteral` dit si un nombre était en cours.
    pub(super) fn executer(&mut self, touche: Touche, arc: bool, litteral: bool) {
        if let Some(op) = Binaire::depuis_touche(touche) {
            let r = op.calculer(self.pile.y, self.pile.x, self.reglages.puissance);
            debug!(?op, y = self.pile.y, x = self.pile.x, resultat = r, "binaire");
            self.pile.abaisser(r, self.reglages.fond_de_pile);
            self.elevation = true;
            return;
        }

        if let Some(op) = Unaire::depuis_touche(touche) {
            let r = op.calculer(self.pile.x, arc, self.reglages.angle);
            debug!(?op, arc, x = self.pile.x, resultat = r, "unaire");
            self.pile.remplacer_x(r);
            self.elevation = true;
            return;
        }

        match touche {
            Touche::Enter => {
                self.pile.pousser(self.pile.x);
                self.elevation = false;
            }
            Touche::EchangeXY => {
                self.pile.echanger_xy();
                self.elevation = false;
            }
            Touche::RoulerBas => {
                self.pile.rouler_bas();
                self.elevation = false;
            }
            Touche::Sto => {
                self.memoire.stocker(self.pile.x);
                self.elevation = true;
            }
            Touche::Rcl => self.entrer_valeur(self.memoire.rappeler(), litteral),
            Touche::Pi => self.entrer_valeur(std::f64::consts::PI, litteral),
            Touche::Clx => {
                self.pile.remplacer_x(0.0);
                self.elevation = false;
            }
            Touche::Clr => {
                self.pile.vider();
                if self.reglages.clr_efface_memoire {
                    self.memoire.effacer();
                }
                self.elevation = false;
            }
            // saisie et préfixe : traités en amont
            Touche::Chiffre(_) | Touche::Point | Touche::Chs | Touche::Eex | Touche::Arc => {}
            // déjà couverts par Binaire / Unaire
            Touche::Plus
            | Touche::Moins
            | Touche::Fois
            | Touche::Divise
            | Touche::Puissance
            | Touche::Racine
            | Touche::Inverse
            | Touche::Log
            | Touche::Ln
            | Touche::Exp
            | Touche::Sin
            | Touche::Cos
            | Touche::Tan => {}
        }
    }

    /// Valeur complète déposée en X (π, RCL) : pousse si l’élévation est armée
    /// ou si un littéral venait d’être tapé, sinon écrase X.
    fn entrer_valeur(&mut self, v: f64, litteral: bool) {
        if self.elevation || litteral {
            self.pile.pousser(v);
        } else {
            self.pile.remplacer_x(v);
        }
        self.elevation = true;
    }
}
