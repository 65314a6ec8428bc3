//! Calculatrice HP-35 — noyau RPN
//!
//! Le noyau est pur : `appliquer(état, touche) -> état` et `rendre(état) -> Affichage`.
//! La présentation (eframe) vit dans le binaire.

pub mod noyau;
