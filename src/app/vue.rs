// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Display type LED (monospace, largeur fixe) alimenté par Affichage::texte()
// - Clavier HP-35 : 3 rangées de fonctions (5 touches), rangée ENTER, pavé 4 colonnes
//
// Note :
// - La vue ne calcule rien : chaque clic devient une Touche envoyée au noyau.

use eframe::egui;

use calculatrice_hp35::noyau::Touche;

use super::etat::AppCalc;

/// Couleur LED rouge du display.
const ROUGE_LED: egui::Color32 = egui::Color32::from_rgb(255, 40, 0);

const RANGEES_FONCTIONS: [[Touche; 5]; 3] = [
    [Touche::Puissance, Touche::Log, Touche::Ln, Touche::Exp, Touche::Clr],
    [Touche::Racine, Touche::Arc, Touche::Sin, Touche::Cos, Touche::Tan],
    [Touche::Inverse, Touche::EchangeXY, Touche::RoulerBas, Touche::Sto, Touche::Rcl],
];

const PAVE: [[Touche; 4]; 4] = [
    [Touche::Moins, Touche::Chiffre(7), Touche::Chiffre(8), Touche::Chiffre(9)],
    [Touche::Plus, Touche::Chiffre(4), Touche::Chiffre(5), Touche::Chiffre(6)],
    [Touche::Fois, Touche::Chiffre(1), Touche::Chiffre(2), Touche::Chiffre(3)],
    [Touche::Divise, Touche::Chiffre(0), Touche::Point, Touche::Pi],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("HP-35");
                ui.add_space(6.0);

                self.ui_display(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                self.ui_etat(ui);
            });
    }

    fn ui_display(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(egui::Color32::from_rgb(16, 4, 0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    egui::RichText::new(&self.affichage)
                        .monospace()
                        .size(26.0)
                        .color(ROUGE_LED),
                );
            });

        if self.calc.etat().arc_arme() {
            ui.colored_label(ROUGE_LED, "arc");
        }
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions_hp35")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in RANGEES_FONCTIONS {
                    for t in rangee {
                        self.bouton(ui, t, [56.0, 30.0]);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        // ENTER (double largeur) + CHS + EEX + CLx
        ui.horizontal(|ui| {
            self.bouton(ui, Touche::Enter, [118.0, 30.0]);
            self.bouton(ui, Touche::Chs, [56.0, 30.0]);
            self.bouton(ui, Touche::Eex, [56.0, 30.0]);
            self.bouton(ui, Touche::Clx, [56.0, 30.0]);
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_hp35")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for t in rangee {
                        self.bouton(ui, t, [64.0, 36.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_etat(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.voir_pile, "Pile");
            if ui
                .button("OFF/ON")
                .on_hover_text("Remise sous tension")
                .clicked()
            {
                self.reset_total();
            }
            if let Some(t) = self.derniere_touche {
                ui.label(format!("dernière touche : {t}"));
            }
        });

        if self.voir_pile {
            let p = *self.calc.pile();
            egui::Grid::new("pile_hp35").num_columns(2).show(ui, |ui| {
                for (nom, v) in [("T", p.t), ("Z", p.z), ("Y", p.y), ("X", p.x)] {
                    ui.monospace(nom);
                    ui.monospace(format!("{v:e}"));
                    ui.end_row();
                }
                ui.monospace("M");
                ui.monospace(format!("{:e}", self.calc.memoire()));
                ui.end_row();
            });
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) {
        let mut texte = egui::RichText::new(touche.libelle());
        if touche.est_saisie() {
            texte = texte.strong();
        }
        let resp = ui.add_sized(taille, egui::Button::new(texte));
        if resp.clicked() {
            self.presser(touche);
        }
    }
}
