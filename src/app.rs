// src/app.rs
//
// Calculatrice RPN: module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier physique : chiffres, + - * /, %, p, Enter, Backspace, Escape

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::{touche_depuis_texte, Touche};

/// Touches nommées -> action (le reste arrive par Event::Text).
///
/// Si un widget a le focus, egui transforme déjà Enter en clic sur ce widget :
/// on ne déclenche pas "=" en plus.
fn touche_nommee(key: egui::Key, widget_focus: bool) -> Option<Touche> {
    match key {
        egui::Key::Enter if widget_focus => None,
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Backspace),
        egui::Key::Escape => Some(Touche::Clear),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Une frame peut contenir plusieurs événements : on les rejoue dans l’ordre.
        let widget_focus = ctx.memory(|m| m.focused().is_some());
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(s) => touche_depuis_texte(s),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => touche_nommee(*key, widget_focus),
                    _ => None,
                })
                .collect()
        });

        for t in touches {
            self.appliquer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
