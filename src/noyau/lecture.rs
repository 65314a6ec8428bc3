// src/noyau/lecture.rs
//
// Lecture décimale exacte d’un f64
// --------------------------------
// Le double est converti en rationnel EXACT (BigRational::from_float),
// puis arrondi une seule fois à 10 chiffres significatifs (demi → loin de zéro).
// Aucune étape ne passe par une conversion flottante intermédiaire :
// le texte affiché est l’arrondi correct de la valeur réellement stockée.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Budget de chiffres du display (mantisse).
pub const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Valeur arrondie : `±0.chiffres × 10^(exposant+1)`, soit `±c.ccccccccc × 10^exposant`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrondi {
    pub negatif: bool,
    /// Exactement CHIFFRES_SIGNIFICATIFS chiffres, le premier non nul.
    pub chiffres: String,
    pub exposant: i32,
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// 10^e exact (e signé).
fn pow10_rat(e: i32) -> BigRational {
    if e >= 0 {
        BigRational::from_integer(pow10(e as usize))
    } else {
        BigRational::new(BigInt::one(), pow10(e.unsigned_abs() as usize))
    }
}

/// floor(r + 1/2) pour r ≥ 0.
fn arrondi_demi_haut(r: &BigRational) -> BigInt {
    let deux = BigInt::from(2);
    let n = r.numer() * &deux + r.denom();
    let d = r.denom() * &deux;
    n / d
}

/// Arrondit `v` à CHIFFRES_SIGNIFICATIFS chiffres.
///
/// Retour:
/// - None si v est nul ou non fini (cas traités par l’appelant)
/// - Some(Arrondi) sinon, déjà renormalisé (9.9999999999 → 1.000000000 × 10¹)
pub fn arrondi_significatif(v: f64) -> Option<Arrondi> {
    if !v.is_finite() || v == 0.0 {
        return None;
    }

    let r = BigRational::from_float(v)?.abs();

    // estimation flottante, puis ajustement exact : 10^e ≤ r < 10^(e+1)
    let mut e = v.abs().log10().floor() as i32;
    while r < pow10_rat(e) {
        e -= 1;
    }
    while r >= pow10_rat(e + 1) {
        e += 1;
    }

    let n = CHIFFRES_SIGNIFICATIFS as i32;
    let mut scaled = arrondi_demi_haut(&(r * pow10_rat(n - 1 - e)));

    // l’arrondi peut atteindre 10^n : on renormalise
    if scaled == pow10(CHIFFRES_SIGNIFICATIFS) {
        scaled = pow10(CHIFFRES_SIGNIFICATIFS - 1);
        e += 1;
    }

    Some(Arrondi {
        negatif: v < 0.0,
        chiffres: scaled.to_str_radix(10),
        exposant: e,
    })
}
