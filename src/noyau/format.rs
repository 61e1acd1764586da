// src/noyau/format.rs

use super::erreur::ErreurCalc;

/// Nombre de décimales gardées à l’affichage (masque les artefacts binaires).
pub const PRECISION_DECIMALES: i32 = 10;

/* ------------------------ Arrondi ------------------------ */

/// Arrondi à l’entier, demi-entiers vers +∞ (-2.5 -> -2, 2.5 -> 3).
fn arrondi_demi_haut(x: f64) -> f64 {
    let r = x.round();
    if x - r == 0.5 {
        r + 1.0
    } else {
        r
    }
}

/// round((v + ε) * 10^p) / 10^p
///
/// - v non fini => NonFini
/// - si la mise à l’échelle déborde, v est déjà entier à cette magnitude : on le garde
pub fn arrondir(v: f64) -> Result<f64, ErreurCalc> {
    if !v.is_finite() {
        return Err(ErreurCalc::NonFini);
    }

    let echelle = 10f64.powi(PRECISION_DECIMALES);
    let scaled = (v + f64::EPSILON) * echelle;
    if !scaled.is_finite() {
        return Ok(v);
    }

    let r = arrondi_demi_haut(scaled) / echelle;
    // pas de "-0" à l’écran
    Ok(if r == 0.0 { 0.0 } else { r })
}

/* ------------------------ Texte ------------------------ */

/// Texte d’un résultat : forme décimale la plus courte, sans exposant.
/// Le texte produit est toujours relisible comme littéral (il redevient l’entrée courante).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
