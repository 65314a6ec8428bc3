// src/noyau/format.rs
//
// Affichage façon LED : signe, mantisse, exposant
// -----------------------------------------------
// Une seule politique (pas de mélange de variantes) :
// - 0                      -> "0."
// - 10^-2 ≤ |v| < 10^10     -> virgule fixe, 10 chiffres significatifs, zéros finaux retirés
// - sinon                  -> scientifique, mantisse d.ddddddddd, exposant sur 2 chiffres
// - |exposant| > 99        -> dépassement "9.999999999 99" / sous-dépassement "0."
// - NaN, ±∞                -> "Error"
//
// Pendant une saisie, le tampon est rendu tel quel (jamais ré-arrondi).

use std::fmt;

use super::lecture::arrondi_significatif;

pub const EXPOSANT_FIXE_MIN: i32 = -2;
pub const EXPOSANT_FIXE_MAX: i32 = 9;
pub const EXPOSANT_MAX: i32 = 99;

/// Largeur de la zone mantisse ("0.0123456789" = 12 caractères).
pub const LARGEUR_MANTISSE: usize = 12;

pub const TEXTE_ERREUR: &str = "Error";
const MANTISSE_DEPASSEMENT: &str = "9.999999999";

/// Enregistrement prêt à afficher, consommé par la couche de présentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// '-' ou ' '
    pub signe: char,
    pub mantisse: String,
    /// Toujours 3 caractères : signe (' ' ou '-') + 2 chiffres.
    pub exposant: Option<String>,
}

impl Affichage {
    pub fn zero() -> Self {
        Self {
            signe: ' ',
            mantisse: "0.".to_string(),
            exposant: None,
        }
    }

    pub fn erreur() -> Self {
        Self {
            signe: ' ',
            mantisse: TEXTE_ERREUR.to_string(),
            exposant: None,
        }
    }

    pub fn est_erreur(&self) -> bool {
        self.mantisse == TEXTE_ERREUR
    }

    /// Ligne de largeur fixe : signe + mantisse calée à gauche + exposant (ou blancs).
    pub fn texte(&self) -> String {
        format!(
            "{}{:<largeur$}{}",
            self.signe,
            self.mantisse,
            self.exposant.as_deref().unwrap_or("   "),
            largeur = LARGEUR_MANTISSE
        )
    }

    /// Relit la valeur affichée (None pour "Error").
    pub fn valeur(&self) -> Option<f64> {
        if self.est_erreur() {
            return None;
        }
        let mut s = String::new();
        if self.signe == '-' {
            s.push('-');
        }
        s.push_str(self.mantisse.trim());
        if let Some(e) = &self.exposant {
            s.push('e');
            s.push_str(e.trim());
        }
        s.parse().ok()
    }
}

impl fmt::Display for Affichage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texte())
    }
}

/* ------------------------ Valeur calculée ------------------------ */

/// Formate une valeur de la pile.
pub fn formater(v: f64) -> Affichage {
    if !v.is_finite() {
        return Affichage::erreur();
    }
    let Some(a) = arrondi_significatif(v) else {
        return Affichage::zero();
    };

    let signe = if a.negatif { '-' } else { ' ' };

    if a.exposant > EXPOSANT_MAX {
        return Affichage {
            signe,
            mantisse: MANTISSE_DEPASSEMENT.to_string(),
            exposant: Some(format_exposant(EXPOSANT_MAX)),
        };
    }
    if a.exposant < -EXPOSANT_MAX {
        return Affichage::zero();
    }

    if (EXPOSANT_FIXE_MIN..=EXPOSANT_FIXE_MAX).contains(&a.exposant) {
        Affichage {
            signe,
            mantisse: mantisse_fixe(&a.chiffres, a.exposant),
            exposant: None,
        }
    } else {
        Affichage {
            signe,
            mantisse: mantisse_scientifique(&a.chiffres),
            exposant: Some(format_exposant(a.exposant)),
        }
    }
}

/// "1234567890" avec e=2 -> "123.456789" ; e=-2 -> "0.0123456789"
fn mantisse_fixe(chiffres: &str, e: i32) -> String {
    if e >= 0 {
        let (entier, frac) = chiffres.split_at(e as usize + 1);
        format!("{entier}.{}", frac.trim_end_matches('0'))
    } else {
        let zeros = "0".repeat((e.unsigned_abs() - 1) as usize);
        format!("0.{zeros}{}", chiffres.trim_end_matches('0'))
    }
}

fn mantisse_scientifique(chiffres: &str) -> String {
    let (tete, reste) = chiffres.split_at(1);
    format!("{tete}.{}", reste.trim_end_matches('0'))
}

/// Exposant sur 3 caractères : " 05", "-12".
pub fn format_exposant(e: i32) -> String {
    let signe = if e < 0 { '-' } else { ' ' };
    format!("{signe}{:02}", e.unsigned_abs())
}

/* ------------------------ Saisie en cours ------------------------ */

/// Tampon de mantisse tel que tapé ; le point décimal est toujours visible.
pub fn formater_saisie(negatif: bool, tampon: &str) -> Affichage {
    let mantisse = if tampon.contains('.') {
        tampon.to_string()
    } else {
        format!("{tampon}.")
    };
    Affichage {
        signe: if negatif { '-' } else { ' ' },
        mantisse,
        exposant: None,
    }
}

/// Saisie d’exposant : mantisse figée + champ d’exposant en cours.
pub fn formater_saisie_exposant(
    negatif: bool,
    texte_mantisse: &str,
    exposant_negatif: bool,
    exposant: u32,
) -> Affichage {
    let signe_exp = if exposant_negatif { '-' } else { ' ' };
    Affichage {
        signe: if negatif { '-' } else { ' ' },
        mantisse: texte_mantisse.to_string(),
        exposant: Some(format!("{signe_exp}{exposant:02}")),
    }
}
