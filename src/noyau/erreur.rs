//! Erreurs du noyau.
//!
//! L’arithmétique ne produit jamais d’erreur (NaN / ±∞ circulent tels quels).
//! Seules les frontières texte (jetons, réglages) peuvent échouer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErreurNoyau {
    #[error("touche inconnue: {0:?}")]
    ToucheInconnue(String),

    #[error("réglages invalides: {0}")]
    Reglages(#[from] serde_json::Error),
}

impl ErreurNoyau {
    pub fn touche_inconnue(jeton: impl Into<String>) -> Self {
        Self::ToucheInconnue(jeton.into())
    }
}

pub type Result<T> = std::result::Result<T, ErreurNoyau>;
