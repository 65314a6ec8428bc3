//! Tests de scénarios : suites de touches comme au clavier.
//!
//! Chaque test part d’une machine sous tension (pile et mémoire à zéro)
//! et vérifie X, la pile ou l’affichage après la suite.

use super::eval::{appliquer, Calculatrice, EtatCalc};
use super::format::Affichage;
use super::jetons::Touche;
use super::pile::Pile;
use super::reglages::{FondDePile, OrdrePuissance, Reglages, UniteAngle};
use super::saisie::Saisie;

const EPS: f64 = 1e-9;

fn calc(jetons: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::default();
    c.appliquer_jetons(jetons)
        .unwrap_or_else(|e| panic!("jetons={jetons:?} err={e}"));
    c
}

fn calc_avec(reglages: Reglages, jetons: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::new(reglages);
    c.appliquer_jetons(jetons)
        .unwrap_or_else(|e| panic!("jetons={jetons:?} err={e}"));
    c
}

fn assert_x(jetons: &[&str], attendu: f64) {
    let x = calc(jetons).pile().x;
    assert!(
        (x - attendu).abs() < EPS,
        "jetons={jetons:?} x={x} attendu={attendu}"
    );
}

fn ecran(jetons: &[&str]) -> Affichage {
    calc(jetons).affichage()
}

/* ------------------------ Mise sous tension ------------------------ */

#[test]
fn scen_depart_a_zero() {
    let c = Calculatrice::default();
    assert_eq!(*c.pile(), Pile::default());
    assert_eq!(c.memoire(), 0.0);
    assert_eq!(c.affichage().mantisse, "0.");
    assert_eq!(c.affichage().signe, ' ');
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn scen_tampon_de_saisie() {
    let mut c = Calculatrice::default();
    c.appliquer_jetons(&["5", "ENTER", "6", "ENTER"]).unwrap();
    let avant = *c.pile();

    c.appliquer_jetons(&["1", "2", ".", "3"]).unwrap();
    assert_eq!(c.etat().tampon(), Some("12.3"));
    assert_eq!(c.affichage().mantisse, "12.3");
    assert!((c.pile().x - 12.3).abs() < EPS);
    // pas d’élévation après ENTER : Y/Z/T inchangés
    assert_eq!(c.pile().y, avant.y);
    assert_eq!(c.pile().z, avant.z);
    assert_eq!(c.pile().t, avant.t);
}

#[test]
fn scen_point_toujours_visible() {
    let a = ecran(&["1", "2", "3"]);
    assert_eq!(a.mantisse, "123.");
    let a = ecran(&["1", "2", "3", ".", "4"]);
    assert_eq!(a.mantisse, "123.4");
}

#[test]
fn scen_point_au_repos_ouvre_zero_point() {
    let c = calc(&["."]);
    assert_eq!(c.etat().tampon(), Some("0."));
    let c = calc(&[".", "5"]);
    assert!((c.pile().x - 0.5).abs() < EPS);
}

#[test]
fn scen_second_point_ignore() {
    let c = calc(&["1", ".", "2", ".", "3"]);
    assert_eq!(c.etat().tampon(), Some("1.23"));
}

#[test]
fn scen_zero_de_tete_remplace() {
    let c = calc(&["0", "0", "7"]);
    assert_eq!(c.etat().tampon(), Some("7"));
}

#[test]
fn scen_dix_chiffres_au_plus() {
    let c = calc(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2"]);
    assert_eq!(c.etat().tampon(), Some("1234567890"));
    assert_eq!(c.pile().x, 1234567890.0);

    let c = calc(&[".", "1", "2", "3", "4", "5", "6", "7", "8", "9", "9"]);
    assert_eq!(c.etat().tampon(), Some("0.123456789"));
}

#[test]
fn scen_affichage_brut_pendant_saisie() {
    // pas d’arrondi ni de suppression des zéros pendant la frappe
    let a = ecran(&["1", ".", "5", "0", "0"]);
    assert_eq!(a.mantisse, "1.500");
    let a = ecran(&["1", ".", "5", "0", "0", "ENTER"]);
    assert_eq!(a.mantisse, "1.5");
}

/* ------------------------ RPN de base ------------------------ */

#[test]
fn scen_addition_rpn() {
    assert_x(&["3", "ENTER", "4", "+"], 7.0);
}

#[test]
fn scen_operation_repetee_lit_des_zeros() {
    let c = calc(&["3", "ENTER", "4", "+", "+"]);
    assert_eq!(c.pile().x, 7.0);
    assert_eq!(*c.pile(), Pile { x: 7.0, ..Pile::default() });
}

#[test]
fn scen_pile_descend() {
    assert_x(&["3", "ENTER", "4", "ENTER", "5", "+", "+"], 12.0);
}

#[test]
fn scen_soustraction_et_division_y_op_x() {
    assert_x(&["1", "0", "ENTER", "3", "−"], 7.0);
    assert_x(&["1", "0", "ENTER", "4", "÷"], 2.5);
    assert_x(&["6", "ENTER", "7", "×"], 42.0);
}

#[test]
fn scen_unaire_laisse_y() {
    assert_x(&["9", "ENTER", "2", "√x", "+"], 9.0 + 2f64.sqrt());
}

#[test]
fn scen_echange_xy() {
    assert_x(&["3", "ENTER", "4", "x↔y", "+"], 7.0);
    assert_x(&["1", "0", "ENTER", "3", "x⮂y", "−"], -7.0);
    let c = calc(&["1", "ENTER", "2", "ENTER", "3", "ENTER", "4", "x⮂y"]);
    assert_eq!(*c.pile(), Pile { x: 3.0, y: 4.0, z: 2.0, t: 1.0 });
}

#[test]
fn scen_echange_n_arme_pas_l_elevation() {
    let c = calc(&["3", "ENTER", "4", "x↔y"]);
    assert!(!c.etat().elevation_armee());
    // le chiffre suivant écrase X
    let c = calc(&["3", "ENTER", "4", "x↔y", "9"]);
    assert_eq!(*c.pile(), Pile { x: 9.0, y: 4.0, z: 0.0, t: 0.0 });
}

#[test]
fn scen_elevation_apres_resultat() {
    // 2 + 3 = 5, puis 7 pousse le 5
    let c = calc(&["2", "ENTER", "3", "+", "7"]);
    assert_eq!(c.pile().x, 7.0);
    assert_eq!(c.pile().y, 5.0);
    assert_x(&["2", "ENTER", "3", "+", "7", "×"], 35.0);
}

#[test]
fn scen_enter_pousse_et_desarme() {
    let c = calc(&["5", "ENTER"]);
    assert_eq!(*c.pile(), Pile { x: 5.0, y: 5.0, z: 0.0, t: 0.0 });
    assert!(!c.etat().elevation_armee());
    assert_x(&["5", "ENTER", "×"], 25.0);
}

#[test]
fn scen_pousser_perd_t() {
    let c = calc(&["1", "ENTER", "2", "ENTER", "3", "ENTER", "4", "ENTER", "5"]);
    assert_eq!(*c.pile(), Pile { x: 5.0, y: 4.0, z: 3.0, t: 2.0 });
}

#[test]
fn scen_rouler_bas() {
    assert_x(&["1", "ENTER", "2", "ENTER", "3", "R↓", "+"], 3.0);
    let c = calc(&["1", "ENTER", "2", "ENTER", "3", "ENTER", "4", "R↓"]);
    assert_eq!(*c.pile(), Pile { x: 3.0, y: 2.0, z: 1.0, t: 4.0 });
    assert_eq!(c.affichage().mantisse, "3.");
}

/* ------------------------ Fond de pile (réglage) ------------------------ */

#[test]
fn scen_fond_de_pile_conserve() {
    let r = Reglages {
        fond_de_pile: FondDePile::Conserve,
        ..Reglages::default()
    };
    // T = 1 dupliqué à chaque descente
    let c = calc_avec(r, &["1", "ENTER", "ENTER", "ENTER", "2", "+", "+", "+"]);
    assert_eq!(c.pile().x, 5.0);
    assert_eq!(c.pile().t, 1.0);

    let c = calc(&["1", "ENTER", "ENTER", "ENTER", "2", "+", "+", "+"]);
    assert_eq!(c.pile().x, 5.0);
    assert_eq!(c.pile().t, 0.0);
}

/* ------------------------ x^y (réglage) ------------------------ */

#[test]
fn scen_puissance_base_x() {
    // Y=3, X=2 : 2^3
    assert_x(&["3", "ENTER", "2", "x^y"], 8.0);
}

#[test]
fn scen_puissance_base_y() {
    let r = Reglages {
        puissance: OrdrePuissance::BaseY,
        ..Reglages::default()
    };
    let c = calc_avec(r, &["3", "ENTER", "2", "x^y"]);
    assert_eq!(c.pile().x, 9.0);
}

/* ------------------------ CHS ------------------------ */

#[test]
fn scen_chs_pendant_saisie() {
    let a = ecran(&["5", "CHS"]);
    assert_eq!(a.signe, '-');
    assert_eq!(a.mantisse, "5.");

    // la saisie continue sous le nouveau signe
    let c = calc(&["5", "CHS", "2"]);
    assert_eq!(c.pile().x, -52.0);
    assert_eq!(c.etat().tampon(), Some("52"));
}

#[test]
fn scen_chs_au_repos_signe_en_attente() {
    // 2 3 + -> 5 ; CHS -> -5 et signe en attente
    let c = calc(&["2", "ENTER", "3", "+", "CHS"]);
    assert_eq!(c.pile().x, -5.0);
    assert_eq!(c.affichage().signe, '-');

    // le littéral neuf hérite du signe ; -5 est poussé (élévation armée)
    let c = calc(&["2", "ENTER", "3", "+", "CHS", "7"]);
    assert_eq!(c.pile().x, -7.0);
    assert_eq!(c.pile().y, -5.0);
    assert_eq!(c.affichage().signe, '-');
}

#[test]
fn scen_double_chs_au_repos_annule() {
    let c = calc(&["2", "ENTER", "3", "+", "CHS", "CHS", "7"]);
    assert_eq!(c.pile().x, 7.0);
    assert_eq!(c.pile().y, 5.0);
}

#[test]
fn scen_signe_en_attente_abandonne_par_validation() {
    let c = calc(&["4", "ENTER", "CHS", "ENTER", "1"]);
    assert_eq!(c.pile().x, 1.0);
    assert_eq!(c.pile().y, -4.0);
}

/* ------------------------ EEX ------------------------ */

#[test]
fn scen_eex_simple() {
    let c = calc(&["1", "EEX", "2"]);
    assert!((c.pile().x - 100.0).abs() < EPS);
    let a = c.affichage();
    assert_eq!(a.mantisse, "1.");
    assert_eq!(a.exposant.as_deref(), Some(" 02"));
}

#[test]
fn scen_eex_deux_chiffres_au_plus() {
    let c = calc(&["2", "EEX", "1", "2", "3"]);
    assert!((c.pile().x - 2e12).abs() < 1.0);
    assert_eq!(c.affichage().exposant.as_deref(), Some(" 12"));
}

#[test]
fn scen_eex_exposant_negatif() {
    let c = calc(&["1", ".", "5", "EEX", "CHS", "3"]);
    assert!((c.pile().x - 1.5e-3).abs() < 1e-15);
    let a = c.affichage();
    assert_eq!(a.mantisse, "1.5");
    assert_eq!(a.exposant.as_deref(), Some("-03"));
}

#[test]
fn scen_eex_chs_apres_chiffre_ignore() {
    let c = calc(&["1", "EEX", "3", "CHS"]);
    assert!((c.pile().x - 1000.0).abs() < EPS);
    assert_eq!(c.affichage().exposant.as_deref(), Some(" 03"));
}

#[test]
fn scen_eex_mantisse_negative() {
    let c = calc(&["2", "CHS", "EEX", "2"]);
    assert!((c.pile().x + 200.0).abs() < EPS);
    assert_eq!(c.affichage().signe, '-');
}

#[test]
fn scen_eex_puis_operation() {
    assert_x(&["3", "ENTER", "1", "EEX", "2", "×"], 300.0);
    let a = ecran(&["1", "EEX", "2", "0", "ENTER"]);
    assert_eq!(a.mantisse, "1.");
    assert_eq!(a.exposant.as_deref(), Some(" 20"));
}

#[test]
fn scen_eex_repete_et_point_sans_effet() {
    let c = calc(&["4", "EEX", "EEX", ".", "1"]);
    assert!((c.pile().x - 40.0).abs() < EPS);
    assert!(matches!(c.etat().saisie(), Saisie::Exposant(_)));
}

#[test]
fn scen_eex_au_repos_fige_x() {
    let c = calc(&["2", "ENTER", "3", "+", "EEX", "3"]);
    assert!((c.pile().x - 5000.0).abs() < EPS);
    assert_eq!(c.pile().y, 0.0);
}

#[test]
fn scen_eex_sur_zero_fige_zero() {
    let c = calc(&["2", "ENTER", "2", "−", "EEX", "3"]);
    assert_eq!(c.pile().x, 0.0);
    assert_eq!(c.pile().y, 0.0);
    let a = c.affichage();
    assert_eq!(a.mantisse, "0.");
    assert_eq!(a.exposant.as_deref(), Some(" 03"));
}

#[test]
fn scen_eex_sur_tampon_zero() {
    let c = calc(&[".", "EEX", "5"]);
    assert_eq!(c.pile().x, 0.0);
    assert!(matches!(c.etat().saisie(), Saisie::Exposant(_)));
    let a = c.affichage();
    assert_eq!(a.mantisse, "0.");
    assert_eq!(a.exposant.as_deref(), Some(" 05"));
}

#[test]
fn scen_eex_sur_notation_scientifique() {
    let c = calc(&["1", "EEX", "2", "0", "ENTER", "EEX", "5"]);
    assert!((c.pile().x / 1e25 - 1.0).abs() < EPS, "x={}", c.pile().x);
    assert!((c.pile().y / 1e20 - 1.0).abs() < EPS);
    assert_eq!(c.pile().z, 0.0);
    // l’écran suit X
    let a = c.affichage();
    assert_eq!(a.mantisse, "1.");
    assert_eq!(a.exposant.as_deref(), Some(" 25"));
}

#[test]
fn scen_eex_sur_error_reste_error() {
    let c = calc(&["1", "ENTER", "0", "÷", "EEX", "2"]);
    assert!(c.pile().x.is_infinite());
    assert!(c.affichage().est_erreur());
    assert_eq!(c.pile().y, 0.0);
}

/* ------------------------ arc + trig ------------------------ */

#[test]
fn scen_arc_un_seul_coup() {
    let c = calc(&["1", "arc", "sin"]);
    assert!((c.pile().x - 90.0).abs() < EPS);
    assert!(!c.etat().arc_arme());

    let c = calc(&["1", "arc", "sin", "sin"]);
    assert!((c.pile().x - 1.0).abs() < EPS);
}

#[test]
fn scen_arc_perdu_sur_autre_touche() {
    // arc puis 1/x : le préfixe disparaît sans rien annuler
    let c = calc(&["2", "arc", "1/x", "sin"]);
    let attendu = 0.5f64.to_radians().sin();
    assert!((c.pile().x - attendu).abs() < EPS);
    assert!(!c.etat().arc_arme());
}

#[test]
fn scen_arc_ne_clot_pas_la_saisie() {
    let c = calc(&["3", "arc", "0"]);
    assert_eq!(c.etat().tampon(), Some("30"));
    assert!(!c.etat().arc_arme());
}

#[test]
fn scen_trig_en_degres() {
    assert_x(&["3", "0", "sin"], 0.5);
    assert_x(&["6", "0", "cos"], 0.5);
    assert_x(&["4", "5", "tan"], 1.0);
    assert_x(&["1", "8", "0", "sin"], 0.0);
    assert_x(&[".", "5", "arc", "cos"], 60.0);
    assert_x(&["1", "arc", "tan"], 45.0);
}

#[test]
fn scen_trig_en_radians() {
    let r = Reglages {
        angle: UniteAngle::Radians,
        ..Reglages::default()
    };
    let c = calc_avec(r, &["1", "arc", "sin"]);
    assert!((c.pile().x - std::f64::consts::FRAC_PI_2).abs() < EPS);
}

#[test]
fn scen_tan_90_erreur() {
    let c = calc(&["9", "0", "tan"]);
    assert_eq!(c.pile().x, f64::INFINITY);
    assert!(c.affichage().est_erreur());
}

/* ------------------------ Fonctions unaires ------------------------ */

#[test]
fn scen_fonctions_unaires() {
    assert_x(&["1", "0", "0", "log"], 2.0);
    assert_x(&["1", "ln"], 0.0);
    assert_x(&["0", "e^x"], 1.0);
    assert_x(&["4", "1/x"], 0.25);
    assert_x(&["1", "6", "√x"], 4.0);
}

#[test]
fn scen_domaine_invalide_propage() {
    let c = calc(&["2", "CHS", "√x"]);
    assert!(c.pile().x.is_nan());
    assert_eq!(c.affichage().mantisse, "Error");

    // NaN circule dans la pile sans bloquer
    let c = calc(&["2", "CHS", "√x", "ENTER", "1", "+"]);
    assert!(c.pile().x.is_nan());
}

#[test]
fn scen_division_par_zero() {
    let c = calc(&["1", "ENTER", "0", "÷"]);
    assert_eq!(c.pile().x, f64::INFINITY);
    assert!(c.affichage().est_erreur());
    assert_eq!(c.affichage().valeur(), None);
}

/* ------------------------ π ------------------------ */

#[test]
fn scen_pi_ecrase_apres_enter() {
    let c = calc(&["2", "ENTER", "π", "×"]);
    assert!((c.pile().x - 2.0 * std::f64::consts::PI).abs() < EPS);
}

#[test]
fn scen_pi_pousse_apres_litteral() {
    let c = calc(&["3", "π"]);
    assert_eq!(c.pile().y, 3.0);
    assert!((c.pile().x - std::f64::consts::PI).abs() < EPS);
    assert!(c.etat().elevation_armee());
    assert_eq!(c.affichage().mantisse, "3.141592654");
}

#[test]
fn scen_pi_arme_l_elevation() {
    let c = calc(&["π", "2"]);
    assert_eq!(c.pile().x, 2.0);
    assert!((c.pile().y - std::f64::consts::PI).abs() < EPS);
}

#[test]
fn scen_pi_clot_l_exposant() {
    let c = calc(&["1", "EEX", "π"]);
    assert!(!c.etat().saisie().est_active());
    assert!((c.pile().x - std::f64::consts::PI).abs() < EPS);
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn scen_sto_clr_rcl() {
    let c = calc(&["8", "STO", "CLR", "RCL"]);
    assert_eq!(c.pile().x, 8.0);
    assert_eq!(c.memoire(), 8.0);
}

#[test]
fn scen_clr_efface_memoire_si_regle() {
    let r = Reglages {
        clr_efface_memoire: true,
        ..Reglages::default()
    };
    let c = calc_avec(r, &["8", "STO", "CLR", "RCL"]);
    assert_eq!(c.pile().x, 0.0);
    assert_eq!(c.memoire(), 0.0);
}

#[test]
fn scen_sto_ne_touche_pas_la_pile() {
    let c = calc(&["4", "ENTER", "6", "STO"]);
    assert_eq!(*c.pile(), Pile { x: 6.0, y: 4.0, z: 0.0, t: 0.0 });
    assert_eq!(c.memoire(), 6.0);
}

#[test]
fn scen_rcl_pousse_si_elevation() {
    let c = calc(&["5", "STO", "2", "ENTER", "3", "+", "RCL"]);
    assert_eq!(c.pile().x, 5.0);
    assert_eq!(c.pile().y, 5.0);
    assert_x(&["5", "STO", "2", "ENTER", "3", "+", "RCL", "×"], 25.0);
}

/* ------------------------ Effacements ------------------------ */

#[test]
fn scen_clx() {
    assert_x(&["3", "ENTER", "4", "CLx", "+"], 3.0);
    let c = calc(&["3", "ENTER", "4", "CLx", "5"]);
    assert_eq!(*c.pile(), Pile { x: 5.0, y: 3.0, z: 0.0, t: 0.0 });
}

#[test]
fn scen_clr() {
    let c = calc(&["2", "ENTER", "3", "CLR"]);
    assert_eq!(*c.pile(), Pile::default());
    assert_eq!(c.affichage().mantisse, "0.");
}

#[test]
fn scen_clr_ferme_tout() {
    let c = calc(&["2", "EEX", "arc", "CLR"]);
    assert!(!c.etat().saisie().est_active());
    assert!(!c.etat().arc_arme());
    assert_eq!(c.pile().x, 0.0);
}

/* ------------------------ Jetons + pureté ------------------------ */

#[test]
fn scen_jeton_inconnu_sans_effet() {
    let mut c = calc(&["1", "arc"]);
    let avant = c.etat().clone();
    assert!(c.appliquer_jeton("sinh").is_err());
    assert_eq!(*c.etat(), avant);
    assert!(c.etat().arc_arme());
}

#[test]
fn scen_appliquer_est_pur() {
    let e0 = EtatCalc::default();
    let e1 = appliquer(&e0, Touche::Chiffre(4));
    assert_eq!(e0, EtatCalc::default());
    assert_eq!(e1.pile().x, 4.0);

    let e2 = appliquer(&e1, Touche::Enter);
    let e3 = appliquer(&e1, Touche::Enter);
    assert_eq!(e2, e3);
}

#[test]
fn scen_instances_independantes() {
    let mut a = Calculatrice::default();
    let mut b = Calculatrice::default();
    a.appliquer_jetons(&["9", "STO"]).unwrap();
    b.appliquer_jetons(&["1"]).unwrap();
    assert_eq!(b.memoire(), 0.0);
    assert_eq!(a.pile().x, 9.0);
    assert_eq!(b.pile().x, 1.0);
}

#[test]
fn scen_reinitialiser_garde_les_reglages() {
    let r = Reglages {
        angle: UniteAngle::Radians,
        ..Reglages::default()
    };
    let mut c = calc_avec(r, &["7", "STO", "ENTER"]);
    c.reinitialiser();
    assert_eq!(*c.pile(), Pile::default());
    assert_eq!(c.memoire(), 0.0);
    assert_eq!(c.etat().reglages().angle, UniteAngle::Radians);
}
