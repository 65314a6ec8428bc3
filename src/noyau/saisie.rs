// src/noyau/saisie.rs
//
// Saisie d’un littéral : mantisse puis exposant
// ---------------------------------------------
// États : Repos | Mantisse | Exposant (exclusifs par construction).
// La valeur en cours est recopiée dans X après chaque touche,
// donc une touche validante opère toujours sur X.
//
// Règles:
// - chiffre au repos : pousse X si l’élévation est armée, puis ouvre un tampon
// - 10 chiffres de mantisse au plus, 2 chiffres d’exposant au plus (au-delà : ignoré)
// - point : une seule fois ; sans effet pendant l’exposant
// - CHS : signe de la mantisse (saisie), du X + signe en attente (repos),
//         signe de l’exposant (seulement avant le premier chiffre d’exposant)
// - EEX : fige X (ou le tampon) comme mantisse, sans pousser la pile ;
//         sans effet si l’exposant est déjà ouvert

use tracing::trace;

use super::eval::EtatCalc;
use super::format::formater;

/// Chiffres de mantisse (zéro de tête compris).
pub const MAX_CHIFFRES_MANTISSE: usize = 10;
pub const MAX_CHIFFRES_EXPOSANT: u8 = 2;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Saisie {
    #[default]
    Repos,
    Mantisse(SaisieMantisse),
    Exposant(SaisieExposant),
}

impl Saisie {
    pub fn est_active(&self) -> bool {
        !matches!(self, Saisie::Repos)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaisieMantisse {
    /// Texte tapé, sans signe ("12.3", "0.", "7").
    pub tampon: String,
    pub negatif: bool,
}

impl SaisieMantisse {
    fn nouvelle(tampon: &str, negatif: bool) -> Self {
        Self {
            tampon: tampon.to_string(),
            negatif,
        }
    }

    pub fn point_vu(&self) -> bool {
        self.tampon.contains('.')
    }

    fn nb_chiffres(&self) -> usize {
        self.tampon.chars().filter(char::is_ascii_digit).count()
    }

    pub fn valeur(&self) -> f64 {
        let m: f64 = self.tampon.parse().unwrap_or(0.0);
        if self.negatif {
            -m
        } else {
            m
        }
    }

    /// Texte affiché (le point est toujours visible).
    fn texte(&self) -> String {
        if self.point_vu() {
            self.tampon.clone()
        } else {
            format!("{}.", self.tampon)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaisieExposant {
    pub negatif: bool,
    /// |mantisse| figée au moment de EEX.
    pub mantisse: f64,
    /// Mantisse affichée ; None si X figé n’a pas d’écriture fixe
    /// (notation scientifique, Error) : l’écran montre alors X formaté.
    pub texte_mantisse: Option<String>,
    pub chiffres: u8,
    pub valeur: u32,
    pub exposant_negatif: bool,
}

impl SaisieExposant {
    /// ±mantisse × 10^(±exposant)
    pub fn valeur_x(&self) -> f64 {
        let e = self.valeur as i32;
        let e = if self.exposant_negatif { -e } else { e };
        let m = self.mantisse * 10f64.powi(e);
        if self.negatif {
            -m
        } else {
            m
        }
    }
}

impl EtatCalc {
    pub(super) fn saisir_chiffre(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let c = char::from(b'0' + d);

        if matches!(self.saisie, Saisie::Repos) {
            self.commencer_saisie(&c.to_string());
            return;
        }

        match &mut self.saisie {
            Saisie::Mantisse(m) => {
                if m.nb_chiffres() >= MAX_CHIFFRES_MANTISSE {
                    trace!(tampon = %m.tampon, "mantisse pleine");
                    return;
                }
                if m.tampon == "0" {
                    m.tampon.clear();
                }
                m.tampon.push(c);
                self.pile.x = m.valeur();
            }
            Saisie::Exposant(e) => {
                if e.chiffres >= MAX_CHIFFRES_EXPOSANT {
                    trace!(exposant = e.valeur, "exposant plein");
                    return;
                }
                e.valeur = e.valeur * 10 + u32::from(d);
                e.chiffres += 1;
                self.pile.x = e.valeur_x();
            }
            Saisie::Repos => {}
        }
    }

    pub(super) fn saisir_point(&mut self) {
        match &mut self.saisie {
            Saisie::Repos => {}
            Saisie::Mantisse(m) => {
                if !m.point_vu() {
                    m.tampon.push('.');
                }
                return;
            }
            Saisie::Exposant(_) => return,
        }
        self.commencer_saisie("0.");
    }

    pub(super) fn changer_signe(&mut self) {
        match &mut self.saisie {
            Saisie::Repos => {
                self.pile.x = -self.pile.x;
                self.signe_en_attente = !self.signe_en_attente;
            }
            Saisie::Mantisse(m) => {
                m.negatif = !m.negatif;
                self.pile.x = m.valeur();
            }
            Saisie::Exposant(e) => {
                if e.chiffres == 0 {
                    e.exposant_negatif = !e.exposant_negatif;
                }
            }
        }
    }

    pub(super) fn ouvrir_exposant(&mut self) {
        let (negatif, mantisse, texte_mantisse) = match &self.saisie {
            Saisie::Exposant(_) => return,
            Saisie::Mantisse(m) => (m.negatif, m.valeur().abs(), Some(m.texte())),
            Saisie::Repos => {
                let x = self.pile.x;
                let aff = formater(x);
                let texte = if aff.exposant.is_some() || aff.est_erreur() {
                    None
                } else {
                    Some(aff.mantisse)
                };
                (x < 0.0, x.abs(), texte)
            }
        };

        let e = SaisieExposant {
            negatif,
            mantisse,
            texte_mantisse,
            chiffres: 0,
            valeur: 0,
            exposant_negatif: false,
        };
        self.pile.x = e.valeur_x();
        self.saisie = Saisie::Exposant(e);
        self.elevation = false;
        self.signe_en_attente = false;
    }

    /// Ouvre un tampon neuf (élévation de pile + signe en attente consommés).
    fn commencer_saisie(&mut self, tampon: &str) {
        if self.elevation {
            self.pile.pousser(self.pile.x);
        }
        self.elevation = false;

        let negatif = std::mem::take(&mut self.signe_en_attente);
        let m = SaisieMantisse::nouvelle(tampon, negatif);
        self.pile.x = m.valeur();
        self.saisie = Saisie::Mantisse(m);
    }

    /// Ferme toute saisie. Retourne true si un littéral était en cours.
    pub(super) fn clore_saisie(&mut self) -> bool {
        self.signe_en_attente = false;
        std::mem::take(&mut self.saisie).est_active()
    }
}
