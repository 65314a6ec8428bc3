//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UNE calculatrice (noyau) et mémoriser ce que la vue affiche
//! en plus du display (dernière touche, jeton refusé).
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Calculatrice::appliquer`.
//! - Chaque fenêtre / canvas a sa propre instance, rien n’est partagé.

use calculatrice_hp35::noyau::{Affichage, Calculatrice, Reglages, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- sorties ---
    pub affichage: String,
    /// Dernière touche acceptée (barre d’état).
    pub derniere_touche: Option<Touche>,
    /// Message si un jeton clavier a été refusé.
    pub erreur: String,

    // --- UX ---
    /// Afficher la pile X/Y/Z/T sous le display.
    pub voir_pile: bool,
}

impl Default for AppCalc {
    /// Réglages par défaut, display déjà rendu (" 0.").
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let calc = Calculatrice::new(reglages);
        let affichage = calc.affichage().texte();
        Self {
            calc,
            affichage,
            derniere_touche: None,
            erreur: String::new(),
            voir_pile: false,
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Clic sur une touche du clavier à l’écran.
    pub fn presser(&mut self, touche: Touche) {
        let a = self.calc.appliquer(touche);
        self.deposer(a);
        self.derniere_touche = Some(touche);
        self.erreur.clear();
    }

    /// Jeton texte venu du clavier physique ; un jeton inconnu ne change rien.
    pub fn presser_jeton(&mut self, jeton: &str) {
        match self.calc.appliquer_jeton(jeton) {
            Ok(a) => {
                self.deposer(a);
                self.derniere_touche = jeton.parse().ok();
                self.erreur.clear();
            }
            Err(e) => self.erreur = e.to_string(),
        }
    }

    /// Remise sous tension (réglages conservés).
    pub fn reset_total(&mut self) {
        self.calc.reinitialiser();
        self.deposer(self.calc.affichage());
        self.derniere_touche = None;
        self.erreur.clear();
    }

    fn deposer(&mut self, a: Affichage) {
        self.affichage = a.texte();
    }
}
