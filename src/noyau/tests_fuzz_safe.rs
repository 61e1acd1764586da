//! Tests fuzz safe : robustesse + déterminisme de la saisie.
//!
//! But : marteler la machine à états avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de session bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::jetons::{valeur_litterale, Jeton};
use super::saisie::{Calculatrice, EtatSaisie, TEXTE_ERREUR};
use super::Operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(Operateur),
    Pourcent,
    Signe,
    Clear,
    Backspace,
    Egal,
}

fn gen_touche(rng: &mut Rng) -> Touche {
    const CHIFFRES: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
    const OPS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    // chiffres majoritaires, sinon les sessions ne calculent rien
    match rng.pick(20) {
        0..=8 => Touche::Chiffre(CHIFFRES[rng.pick(11) as usize]),
        9..=13 => Touche::Op(OPS[rng.pick(4) as usize]),
        14 => Touche::Pourcent,
        15 => Touche::Signe,
        16 => Touche::Backspace,
        17 => Touche::Clear,
        _ => Touche::Egal,
    }
}

fn appuyer(c: &mut Calculatrice, t: Touche) -> String {
    let affichage = match t {
        Touche::Chiffre(d) => c.input_chiffre(d),
        Touche::Op(op) => c.operateur(op),
        Touche::Pourcent => c.pourcent(),
        Touche::Signe => c.inverser_signe(),
        Touche::Clear => c.clear(),
        Touche::Backspace => c.backspace(),
        Touche::Egal => c.egal(),
    };
    affichage.to_string()
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(c: &Calculatrice, derniere: Touche, affichage: &str) {
    let jetons = c.jetons();

    assert!(
        !matches!(jetons.first(), Some(Jeton::Op(_))),
        "suite commence par un opérateur: {jetons:?}"
    );
    for paire in jetons.windows(2) {
        assert!(
            !(paire[0].est_operateur() && paire[1].est_operateur()),
            "deux opérateurs consécutifs: {jetons:?}"
        );
    }

    assert!(
        c.entree().matches('.').count() <= 1,
        "entrée avec plusieurs points: {:?}",
        c.entree()
    );
    assert!(!c.entree().is_empty(), "entrée vide");

    match derniere {
        Touche::Egal if affichage == TEXTE_ERREUR => {
            assert_eq!(c.entree(), "0");
            assert!(jetons.is_empty());
            assert_eq!(c.etat(), EtatSaisie::Saisie);
        }
        Touche::Egal => {
            // le résultat doit redevenir une entrée valide
            assert!(jetons.is_empty());
            assert_eq!(c.etat(), EtatSaisie::ApresEgal);
            assert_eq!(c.entree(), affichage);
            let v = valeur_litterale(affichage)
                .unwrap_or_else(|e| panic!("résultat illisible {affichage:?}: {e}"));
            assert!(v.is_finite());
        }
        Touche::Op(op) => {
            assert_eq!(affichage, op.symbole().to_string());
            assert_eq!(jetons.last(), Some(&Jeton::Op(op)));
        }
        _ => {}
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_saisie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_resultat = 0usize;
    let mut vu_erreur = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut c = Calculatrice::new();
        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            let aff = appuyer(&mut c, t);
            check_invariants(&c, t, &aff);

            if matches!(t, Touche::Egal) {
                if aff == TEXTE_ERREUR {
                    vu_erreur += 1;
                } else {
                    vu_resultat += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_resultat > 20, "trop peu de résultats: {vu_resultat}");
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let rejouer = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let mut c = Calculatrice::new();
        (0..300)
            .map(|_| {
                let t = gen_touche(&mut rng);
                appuyer(&mut c, t)
            })
            .collect()
    };

    // Même seed => mêmes touches => mêmes affichages
    assert_eq!(rejouer(0xBADC0DE), rejouer(0xBADC0DE));
}

#[test]
fn fuzz_safe_operateurs_en_rafale() {
    let mut rng = Rng::new(0x5EED);
    let mut c = Calculatrice::new();
    c.input_chiffre('7');

    for _ in 0..500 {
        let op = match rng.pick(4) {
            0 => Operateur::Plus,
            1 => Operateur::Moins,
            2 => Operateur::Fois,
            _ => Operateur::Divise,
        };
        c.operateur(op);
        assert_eq!(c.jetons().len(), 2, "un seul opérateur en queue");
        assert_eq!(c.jetons().last(), Some(&Jeton::Op(op)));
    }
}

#[test]
fn fuzz_safe_longue_chaine_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 1 + 1 + ... (2000 fois) : la pile RPN reste bornée (associativité gauche)
    let mut c = Calculatrice::new();
    for _ in 0..2000 {
        c.input_chiffre('1');
        c.operateur(Operateur::Plus);
    }
    c.input_chiffre('1');
    budget(t0, max);

    assert_eq!(c.egal(), "2001");
}
