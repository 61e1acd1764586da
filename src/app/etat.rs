//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique `Calculatrice` de la session et traduire les actions
//! utilisateur (clic sur le pavé, touche clavier) en appels au noyau.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice`.
//! - Une action = un appel au noyau, exécuté jusqu’au bout dans la frame courante.

use calculatrice_rpn::noyau::{Calculatrice, Operateur};

/// Une action utilisateur (bouton du pavé ou touche clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Pourcent,
    Signe,
    Clear,
    Backspace,
    Egal,
}

/// Clavier -> action, pour le texte saisi (chiffres, '.', opérateurs, '%', 'p').
/// Enter / Backspace / Escape sont des touches nommées : voir app.rs.
pub fn touche_depuis_texte(s: &str) -> Option<Touche> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match c {
        '0'..='9' | '.' => Some(Touche::Chiffre(c)),
        '%' => Some(Touche::Pourcent),
        'p' | 'P' => Some(Touche::Signe),
        '=' => Some(Touche::Egal),
        _ => Operateur::depuis_char(c).map(Touche::Operateur),
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(),
        }
    }
}

impl AppCalc {
    /// Applique une action et rend le texte à afficher.
    pub fn appliquer(&mut self, t: Touche) -> &str {
        tracing::trace!(touche = ?t, "action");

        match t {
            Touche::Chiffre(d) => self.calc.input_chiffre(d),
            Touche::Operateur(op) => self.calc.operateur(op),
            Touche::Pourcent => self.calc.pourcent(),
            Touche::Signe => self.calc.inverser_signe(),
            Touche::Clear => self.calc.clear(),
            Touche::Backspace => self.calc.backspace(),
            Touche::Egal => self.calc.egal(),
        }
    }
}
