//! src/noyau/saisie.rs
//!
//! Machine à états de la saisie (clavier de calculatrice).
//!
//! Rôle : posséder l’entrée courante (nombre en cours de frappe, en texte) et la
//! suite de jetons déjà validés, et traduire chaque touche en mutation de cette suite.
//!
//! Contrats :
//! - la suite ne commence jamais par un opérateur
//! - jamais deux opérateurs consécutifs (un nouvel opérateur REMPLACE le précédent)
//! - l’entrée courante contient au plus un '.'
//! - chaque opération rend le texte à afficher
//! - aucune erreur ne sort d’ici : `egal()` les absorbe toutes

use tracing::warn;

use super::eval::{eval_jetons, DemarcheNoyau};
use super::format::{arrondir, format_nombre};
use super::jetons::{format_jetons, valeur_litterale, Jeton, Operateur};

/// Indicateur d’erreur affiché à l’écran.
pub const TEXTE_ERREUR: &str = "Erreur";

const ENTREE_VIDE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatSaisie {
    /// Frappe / édition de l’entrée courante.
    Saisie,
    /// Un opérateur vient d’être validé : le prochain chiffre démarre un nouveau nombre.
    ApresOperateur,
    /// Un résultat est affiché : chiffre => nouvelle expression, opérateur => on continue.
    ApresEgal,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    entree: String,
    jetons: Vec<Jeton>,
    etat: EtatSaisie,
    affichage: String,
    demarche: Option<DemarcheNoyau>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            entree: ENTREE_VIDE.to_string(),
            jetons: Vec::new(),
            etat: EtatSaisie::Saisie,
            affichage: ENTREE_VIDE.to_string(),
            demarche: None,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn etat(&self) -> EtatSaisie {
        self.etat
    }

    /// Jetons + RPN de la dernière évaluation réussie (effacé par C ou une erreur).
    pub fn demarche(&self) -> Option<&DemarcheNoyau> {
        self.demarche.as_ref()
    }

    /// Expression en construction (jetons validés + entrée courante), pour la ligne
    /// au-dessus de l’écran.
    pub fn expression_en_cours(&self) -> String {
        let mut s = format_jetons(&self.jetons);
        if self.etat == EtatSaisie::Saisie {
            if !s.is_empty() {
                s.push(' ');
            }
            s.push_str(&self.entree);
        }
        s
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre '0'..='9' ou '.'. Tout autre caractère est ignoré.
    pub fn input_chiffre(&mut self, d: char) -> &str {
        if !(d.is_ascii_digit() || d == '.') {
            return &self.affichage;
        }

        if self.etat == EtatSaisie::ApresEgal {
            self.entree = ENTREE_VIDE.to_string();
            self.jetons.clear();
        }
        self.etat = EtatSaisie::Saisie;

        if self.entree == ENTREE_VIDE && d != '.' {
            self.entree = d.to_string();
        } else if d == '.' && self.entree.contains('.') {
            return &self.affichage;
        } else {
            self.entree.push(d);
        }

        self.afficher_entree()
    }

    /// Valide l’entrée courante puis pose (ou remplace) l’opérateur.
    pub fn operateur(&mut self, op: Operateur) -> &str {
        // Après un opérateur, l’entrée "0" n’a pas été tapée : on ne la valide pas.
        if self.etat != EtatSaisie::ApresOperateur {
            self.valider_entree();
        }

        match self.jetons.last_mut() {
            Some(Jeton::Op(dernier)) => *dernier = op,
            _ => self.jetons.push(Jeton::Op(op)),
        }

        self.entree = ENTREE_VIDE.to_string();
        self.etat = EtatSaisie::ApresOperateur;
        self.affichage = op.symbole().to_string();
        &self.affichage
    }

    /// Entrée courante / 100 (arrondie). Ne touche pas à la suite de jetons.
    pub fn pourcent(&mut self) -> &str {
        let res = valeur_litterale(&self.entree).and_then(|v| arrondir(v / 100.0));
        match res {
            Ok(v) => {
                self.entree = format_nombre(v);
                self.afficher_entree()
            }
            Err(e) => {
                warn!(entree = %self.entree, erreur = %e, "pourcentage impossible");
                self.affichage = TEXTE_ERREUR.to_string();
                &self.affichage
            }
        }
    }

    /// Inverse le signe de tête de l’entrée courante ("0" : rien).
    pub fn inverser_signe(&mut self) -> &str {
        if self.entree == ENTREE_VIDE {
            return &self.affichage;
        }

        if let Some(reste) = self.entree.strip_prefix('-') {
            // "-" seul (après backspace) : on retombe sur "0", jamais sur une entrée vide
            self.entree = if reste.is_empty() {
                ENTREE_VIDE.to_string()
            } else {
                reste.to_string()
            };
        } else {
            self.entree.insert(0, '-');
        }
        self.afficher_entree()
    }

    /// C : remise à zéro (entrée + suite + démarche).
    pub fn clear(&mut self) -> &str {
        *self = Self::default();
        &self.affichage
    }

    /// Retire le dernier caractère de l’entrée (après "=", équivaut à C).
    pub fn backspace(&mut self) -> &str {
        if self.etat == EtatSaisie::ApresEgal {
            return self.clear();
        }

        if self.entree.chars().count() <= 1 {
            self.entree = ENTREE_VIDE.to_string();
        } else {
            self.entree.pop();
        }
        self.afficher_entree()
    }

    /// Valide l’entrée, évalue toute la suite.
    ///
    /// - succès : le résultat arrondi devient l’entrée courante, suite vidée, état ApresEgal
    /// - échec  : indicateur d’erreur, entrée "0", suite vidée, état Saisie
    pub fn egal(&mut self) -> &str {
        self.valider_entree();
        let jetons = std::mem::take(&mut self.jetons);

        match eval_jetons(&jetons) {
            Ok(ev) => {
                self.entree = ev.texte;
                self.demarche = Some(ev.demarche);
                self.etat = EtatSaisie::ApresEgal;
                self.afficher_entree()
            }
            Err(e) => {
                warn!(jetons = %format_jetons(&jetons), erreur = %e, "évaluation échouée");
                self.entree = ENTREE_VIDE.to_string();
                self.demarche = None;
                self.etat = EtatSaisie::Saisie;
                self.affichage = TEXTE_ERREUR.to_string();
                &self.affichage
            }
        }
    }

    /* ------------------------ Interne ------------------------ */

    fn valider_entree(&mut self) {
        if !self.entree.is_empty() {
            self.jetons.push(Jeton::Nombre(self.entree.clone()));
        }
    }

    fn afficher_entree(&mut self) -> &str {
        self.affichage.clone_from(&self.entree);
        &self.affichage
    }
}
