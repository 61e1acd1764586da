// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton (infix plat, sans parenthèses) en RPN (postfix)
// - Puis évaluer la RPN sur une pile d’opérandes (f64)
//
// Règles:
// - tous les opérateurs sont associatifs à gauche : à précédence égale, on sort
//   d’abord celui de la pile
// - en évaluation, le premier dépilé est l’opérande DROITE

use super::erreur::ErreurCalc;
use super::jetons::{valeur_litterale, Jeton, Operateur};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton.clone()),

            Jeton::Op(op) => {
                while let Some(top) = ops.last().copied() {
                    if top.precedence() >= op.precedence() {
                        ops.pop();
                        out.push(Jeton::Op(top));
                    } else {
                        break;
                    }
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile ops (ordre de pile)
    while let Some(op) = ops.pop() {
        out.push(Jeton::Op(op));
    }

    out
}

/// Évalue une RPN.
///
/// - Nombre : parse du littéral (JetonInvalide si illisible)
/// - Op     : dépile b puis a, empile a op b (DivisionParZero si b == 0)
/// - fin    : exactement une valeur, sinon ExpressionInvalide
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(txt) => st.push(valeur_litterale(txt)?),

            Jeton::Op(op) => {
                let (b, a) = match (st.pop(), st.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    (b, _) => {
                        return Err(ErreurCalc::ExpressionInvalide {
                            profondeur: usize::from(b.is_some()),
                        })
                    }
                };
                st.push(op.appliquer(a, b)?);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalc::ExpressionInvalide {
            profondeur: st.len(),
        }),
    }
}
