// src/app.rs
//
// Calculatrice HP-35 — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en jetons pour le noyau

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier physique (safe natif + web) :
        // - texte tapé : chiffres, point, + - * /
        // - Enter = ENTER↑, Backspace = CLx, Escape = CLR
        let jetons: Vec<String> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Some(t.clone()),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => jeton_de_touche(*key).map(str::to_string),
                    _ => None,
                })
                .collect()
        });
        for j in jetons {
            for c in j.chars() {
                // "12" collé arrive parfois en un seul événement
                self.presser_jeton(c.encode_utf8(&mut [0; 4]));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

fn jeton_de_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("enter"),
        egui::Key::Backspace => Some("clx"),
        egui::Key::Escape => Some("clr"),
        _ => None,
    }
}
