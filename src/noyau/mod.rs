//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - erreur.rs   : erreurs du noyau (thiserror)
//! - jetons.rs   : Jeton / Operateur + littéraux décimaux
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - format.rs   : arrondi 10 décimales + texte affiché
//! - eval.rs     : pipeline complet (jetons -> résultat)
//! - saisie.rs   : machine à états du clavier (entrée courante + suite de jetons)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use jetons::Operateur;
pub use saisie::Calculatrice;
