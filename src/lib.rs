//! Calculatrice RPN : noyau sans UI.
//!
//! - `noyau::saisie`  : machine à états du clavier (`Calculatrice`)
//! - `noyau::eval`    : jetons -> RPN -> résultat arrondi
//!
//! Le binaire (main.rs) ajoute la vue egui par-dessus.

pub mod noyau;
