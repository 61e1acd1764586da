// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression en cours (petit) + affichage (grand, aligné à droite)
// - Pavé 4 colonnes, gros boutons (tactile)
// - Démarche : jetons + RPN de la dernière évaluation
//
// Le clavier physique est géré dans app.rs (événements globaux de la frame).

use eframe::egui;

use super::etat::{AppCalc, Touche};
use calculatrice_rpn::noyau::saisie::EtatSaisie;
use calculatrice_rpn::noyau::Operateur;

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];
const TAILLE_ECRAN: f32 = 36.0;

/// Petit témoin d’état à gauche de l’expression.
fn libelle_etat(etat: EtatSaisie) -> &'static str {
    match etat {
        EtatSaisie::Saisie => "saisie",
        EtatSaisie::ApresOperateur => "op",
        EtatSaisie::ApresEgal => "=",
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.horizontal(|ui| {
                        ui.small(libelle_etat(self.calc.etat()));
                        ui.monospace(self.calc.expression_en_cours());
                    });
                    ui.label(
                        egui::RichText::new(self.calc.affichage())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Clear);
                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "%", Touche::Pourcent);
                self.bouton(ui, "DEL", Touche::Backspace);
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "/", Touche::Operateur(Operateur::Divise));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "*", Touche::Operateur(Operateur::Fois));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "-", Touche::Operateur(Operateur::Moins));
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Chiffre('.'));
                self.bouton(ui, "=", Touche::Egal);
                self.bouton(ui, "+", Touche::Operateur(Operateur::Plus));
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match self.calc.demarche() {
                Some(d) => {
                    Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                    Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                }
                None => {
                    ui.monospace("aucune évaluation");
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.appliquer(touche);
        }
    }
}
