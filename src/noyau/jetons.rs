// src/noyau/jetons.rs

use super::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// '+', '-', '*', '/' seulement.
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Table de précédence (tous associatifs à gauche).
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    /// Calcule `a op b`. Division par zéro exact => erreur (pas d’infini/NaN).
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalc> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b == 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Littéral décimal, gardé tel que tapé (pas d’arrondi prématuré).
    Nombre(String),
    Op(Operateur),
}

impl Jeton {
    /// Classe un texte brut : opérateur, littéral décimal, sinon JetonInvalide.
    pub fn depuis_texte(s: &str) -> Result<Jeton, ErreurCalc> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operateur::depuis_char(c) {
                return Ok(Jeton::Op(op));
            }
        }
        if est_litteral_decimal(s) {
            return Ok(Jeton::Nombre(s.to_string()));
        }
        Err(ErreurCalc::JetonInvalide(s.to_string()))
    }

    pub fn est_operateur(&self) -> bool {
        matches!(self, Jeton::Op(_))
    }
}

/// Littéral accepté : `-?` chiffres, au plus un '.', au moins un chiffre.
/// Ex: "12", "-0.5", "3.", ".25". Refusé: "", "-", ".", "1.2.3", "1e3", "inf".
pub fn est_litteral_decimal(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);
    let mut points = 0usize;
    let mut chiffres = 0usize;

    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    chiffres > 0 && points <= 1
}

/// Valeur numérique d’un littéral (parse au moment du commit seulement).
/// Un littéral hors de la plage f64 (parse en ±inf) => NonFini.
pub fn valeur_litterale(s: &str) -> Result<f64, ErreurCalc> {
    if !est_litteral_decimal(s) {
        return Err(ErreurCalc::JetonInvalide(s.to_string()));
    }
    let v = s
        .parse::<f64>()
        .map_err(|_| ErreurCalc::JetonInvalide(s.to_string()))?;
    if !v.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    Ok(v)
}

/// Format utilitaire (affichage / “démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(txt) => txt.clone(),
            Jeton::Op(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
