// src/noyau/memoire.rs
//
// Registre mémoire unique : écrit par STO, lu par RCL.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire(f64);

impl Memoire {
    pub fn stocker(&mut self, v: f64) {
        self.0 = v;
    }

    pub fn rappeler(&self) -> f64 {
        self.0
    }

    pub fn effacer(&mut self) {
        self.0 = 0.0;
    }
}
