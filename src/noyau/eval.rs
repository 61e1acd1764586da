//! Noyau: évaluation (pipeline réel)
//!
//! jetons -> RPN (shunting-yard) -> pile f64 -> arrondi (10 décimales) -> texte
//!
//! Sans état : la saisie (saisie.rs) appelle `eval_jetons` au moment du "=".

use tracing::debug;

use super::erreur::ErreurCalc;
use super::format::{arrondir, format_nombre};
use super::jetons::{format_jetons, Jeton};
use super::rpn::{eval_rpn, to_rpn};

/// Trace de la dernière évaluation (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// Résultat d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Valeur arrondie (finie).
    pub valeur: f64,
    /// Texte affiché, relisible comme littéral.
    pub texte: String,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue une suite de jetons infix.
pub fn eval_jetons(jetons: &[Jeton]) -> Result<Evaluation, ErreurCalc> {
    let rpn = to_rpn(jetons);

    let demarche = DemarcheNoyau {
        jetons: format_jetons(jetons),
        rpn: format_jetons(&rpn),
    };
    debug!(jetons = %demarche.jetons, rpn = %demarche.rpn, "évaluation");

    let brut = eval_rpn(&rpn)?;
    let valeur = arrondir(brut)?;

    Ok(Evaluation {
        valeur,
        texte: format_nombre(valeur),
        demarche,
    })
}

/// Variante “texte brut” : chaque élément est classé (nombre / opérateur) avant
/// évaluation. Les éléments vides sont ignorés.
pub fn eval_textes(textes: &[&str]) -> Result<Evaluation, ErreurCalc> {
    let jetons = textes
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| Jeton::depuis_texte(t))
        .collect::<Result<Vec<_>, _>>()?;

    eval_jetons(&jetons)
}
