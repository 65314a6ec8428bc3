//! Noyau HP-35 (sans UI)
//!
//! Organisation interne :
//! - pile.rs     : 4 registres X, Y, Z, T
//! - memoire.rs  : registre STO / RCL
//! - lecture.rs  : arrondi décimal exact à 10 chiffres
//! - format.rs   : affichage signe / mantisse / exposant
//! - jetons.rs   : touches (jetons discrets)
//! - saisie.rs   : saisie mantisse + exposant, élévation de pile
//! - rpn.rs      : opérations sur la pile
//! - trig.rs     : sin/cos/tan en degrés, arc
//! - reglages.rs : variantes choisies (fond de pile, x^y, CLR, angle)
//! - eval.rs     : transition appliquer(état, touche) + rendre(état)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod memoire;
pub mod pile;
pub mod reglages;
pub mod rpn;
pub mod saisie;
pub mod trig;

#[cfg(test)]
mod tests_scenarios;



// API publique minimale
pub use erreur::ErreurNoyau;
pub use eval::{appliquer, rendre, Calculatrice, EtatCalc};
pub use format::Affichage;
pub use jetons::Touche;
pub use reglages::Reglages;
