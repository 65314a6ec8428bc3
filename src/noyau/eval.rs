//! Noyau — transition d’état (pipeline réel)
//!
//! touche -> (arc consommé) -> saisie littérale OU clôture + opération -> nouvel état
//! état   -> rendre() -> Affichage
//!
//! Tout l’état vit dans un seul enregistrement `EtatCalc`, possédé par l’appelant :
//! pas de global, deux calculatrices ne partagent rien.

use tracing::{debug, trace, warn};

use super::erreur::Result;
use super::format::{formater, formater_saisie, formater_saisie_exposant, Affichage};
use super::jetons::Touche;
use super::memoire::Memoire;
use super::pile::Pile;
use super::reglages::Reglages;
use super::saisie::Saisie;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EtatCalc {
    pub(super) pile: Pile,
    pub(super) memoire: Memoire,
    pub(super) saisie: Saisie,
    /// Préfixe arc (un seul coup).
    pub(super) arc: bool,
    /// Élévation de pile : le prochain littéral pousse X avant de l’écraser.
    pub(super) elevation: bool,
    /// CHS au repos : signe appliqué au prochain littéral neuf.
    pub(super) signe_en_attente: bool,
    pub(super) reglages: Reglages,
}

impl EtatCalc {
    /// État de mise sous tension : pile et mémoire à zéro.
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn memoire(&self) -> f64 {
        self.memoire.rappeler()
    }

    pub fn saisie(&self) -> &Saisie {
        &self.saisie
    }

    /// Tampon de mantisse en cours ("12.3"), None hors saisie de mantisse.
    pub fn tampon(&self) -> Option<&str> {
        match &self.saisie {
            Saisie::Mantisse(m) => Some(m.tampon.as_str()),
            _ => None,
        }
    }

    pub fn arc_arme(&self) -> bool {
        self.arc
    }

    pub fn elevation_armee(&self) -> bool {
        self.elevation
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    fn traiter(&mut self, touche: Touche) {
        // arc : consommé par la touche suivante, quelle qu’elle soit
        let arc = std::mem::take(&mut self.arc);

        match touche {
            Touche::Arc => self.arc = true,
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Point => self.saisir_point(),
            Touche::Chs => self.changer_signe(),
            Touche::Eex => self.ouvrir_exposant(),
            _ => {
                let litteral = self.clore_saisie();
                self.executer(touche, arc, litteral);
            }
        }

        debug!(
            touche = %touche,
            saisie = self.saisie.est_active(),
            arc = self.arc,
            elevation = self.elevation,
            x = self.pile.x,
            "touche appliquée"
        );
        trace!(pile = ?self.pile, memoire = self.memoire.rappeler());
    }
}

/// Transition pure : l’état d’entrée n’est pas modifié.
pub fn appliquer(etat: &EtatCalc, touche: Touche) -> EtatCalc {
    let mut suivant = etat.clone();
    suivant.traiter(touche);
    suivant
}

/// Rendu pur : le tampon en cours s’il y en a un, sinon X formaté.
pub fn rendre(etat: &EtatCalc) -> Affichage {
    match &etat.saisie {
        Saisie::Repos => formater(etat.pile.x),
        Saisie::Mantisse(m) => formater_saisie(m.negatif, &m.tampon),
        Saisie::Exposant(e) => match &e.texte_mantisse {
            Some(texte) => {
                formater_saisie_exposant(e.negatif, texte, e.exposant_negatif, e.valeur)
            }
            None => formater(etat.pile.x),
        },
    }
}

/* ------------------------ Instance possédée ------------------------ */

/// Calculatrice prête à l’emploi : un `EtatCalc` + les entrées texte.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: EtatCalc,
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            etat: EtatCalc::new(reglages),
        }
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn pile(&self) -> &Pile {
        self.etat.pile()
    }

    pub fn memoire(&self) -> f64 {
        self.etat.memoire()
    }

    pub fn affichage(&self) -> Affichage {
        rendre(&self.etat)
    }

    pub fn appliquer(&mut self, touche: Touche) -> Affichage {
        self.etat = appliquer(&self.etat, touche);
        self.affichage()
    }

    /// Jeton texte ; un jeton inconnu laisse l’état intact (arc compris).
    pub fn appliquer_jeton(&mut self, jeton: &str) -> Result<Affichage> {
        match jeton.parse::<Touche>() {
            Ok(t) => Ok(self.appliquer(t)),
            Err(e) => {
                warn!(jeton, "touche ignorée: {e}");
                Err(e)
            }
        }
    }

    /// Suite de jetons ; s’arrête au premier jeton inconnu.
    pub fn appliquer_jetons(&mut self, jetons: &[&str]) -> Result<Affichage> {
        for j in jetons {
            self.appliquer_jeton(j)?;
        }
        Ok(self.affichage())
    }

    /// Remise sous tension (réglages conservés).
    pub fn reinitialiser(&mut self) {
        self.etat = EtatCalc::new(self.etat.reglages);
    }
}
