// src/noyau/pile.rs
//
// Pile à 4 registres (X, Y, Z, T)
// -------------------------------
// - profondeur fixe : pousser perd l’ancien T
// - valeurs f64 brutes : NaN / ±∞ passent sans contrôle

use super::reglages::FondDePile;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pile {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl Pile {
    /// Y→Z, Z→T (ancien T perdu), Y←X, X←v.
    pub fn pousser(&mut self, v: f64) {
        self.t = self.z;
        self.z = self.y;
        self.y = self.x;
        self.x = v;
    }

    pub fn remplacer_x(&mut self, v: f64) {
        self.x = v;
    }

    /// R↓ : rotation (l’ancien X réapparaît en T).
    pub fn rouler_bas(&mut self) {
        let ancien_x = self.x;
        self.x = self.y;
        self.y = self.z;
        self.z = self.t;
        self.t = ancien_x;
    }

    pub fn echanger_xy(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    /// Fin d’une opération binaire : X←résultat, Y←Z, Z←T, T selon `fond`.
    pub fn abaisser(&mut self, resultat: f64, fond: FondDePile) {
        self.x = resultat;
        self.y = self.z;
        self.z = self.t;
        if fond == FondDePile::Zero {
            self.t = 0.0;
        }
    }

    pub fn vider(&mut self) {
        *self = Pile::default();
    }
}
