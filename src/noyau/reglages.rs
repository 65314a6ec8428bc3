//! Réglages d’une instance de calculatrice.
//!
//! Les variantes historiques de la machine divergent sur quelques points
//! (fond de pile, ordre de x^y, mémoire après CLR, unité d’angle).
//! Chaque point est un choix explicite, testé, jamais deviné.
//!
//! Format JSON (champs optionnels, valeurs par défaut sinon) :
//!
//! ```json
//! { "fond_de_pile": "zero", "puissance": "base_x", "clr_efface_memoire": false, "angle": "degres" }
//! ```

use serde::{Deserialize, Serialize};

use super::erreur::Result;

/// Contenu de T après une opération binaire (la pile descend d’un cran).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FondDePile {
    /// T ← 0 : des opérations répétées finissent par lire des zéros.
    #[default]
    Zero,
    /// T garde sa valeur (duplication, comme la machine physique).
    Conserve,
}

/// Ordre des opérandes de la touche x^y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdrePuissance {
    /// Résultat X^Y : la base est X, l’exposant Y.
    #[default]
    BaseX,
    /// Résultat Y^X.
    BaseY,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniteAngle {
    #[default]
    Degres,
    Radians,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub fond_de_pile: FondDePile,
    pub puissance: OrdrePuissance,
    /// CLR remet aussi la mémoire à zéro.
    pub clr_efface_memoire: bool,
    pub angle: UniteAngle,
}

impl Reglages {
    /// Lit des réglages JSON ; les champs absents gardent leur valeur par défaut.
    pub fn depuis_json(texte: &str) -> Result<Self> {
        Ok(serde_json::from_str(texte)?)
    }
}
