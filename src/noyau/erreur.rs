//! src/noyau/erreur.rs
//!
//! Erreurs du noyau (toutes détectées pendant l’évaluation).
//!
//! Aucune ne sort de la calculatrice : `Calculatrice::egal()` les récupère toutes
//! et remet la saisie dans un état propre.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Ni un littéral décimal, ni un des quatre opérateurs.
    #[error("jeton invalide: {0:?}")]
    JetonInvalide(String),

    /// La pile RPN ne contient pas exactement une valeur à la fin.
    #[error("expression invalide (pile finale: {profondeur} valeur(s))")]
    ExpressionInvalide { profondeur: usize },

    #[error("division par zéro")]
    DivisionParZero,

    /// Dépassement ou autre résultat non fini.
    #[error("erreur mathématique (résultat non fini)")]
    NonFini,
}
