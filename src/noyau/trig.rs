// src/noyau/trig.rs
//
// sin / cos / tan (et arc-fonctions) dans l’unité d’angle réglée
// --------------------------------------------------------------
// - Degrés : réduction modulo 360 AVANT conversion en radians (précision sur grands angles)
// - Angles droits reconnus exactement : sin(180°) = 0, cos(90°) = 0, tan(90°) = +∞
// - arc : fonction inverse native (radians), résultat reconverti dans l’unité réglée
// - Hors domaine (asin(2)…) : NaN, sans erreur

use super::reglages::UniteAngle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    fn directe(self, radians: f64) -> f64 {
        match self {
            TrigFn::Sin => radians.sin(),
            TrigFn::Cos => radians.cos(),
            TrigFn::Tan => radians.tan(),
        }
    }

    fn inverse(self, x: f64) -> f64 {
        match self {
            TrigFn::Sin => x.asin(),
            TrigFn::Cos => x.acos(),
            TrigFn::Tan => x.atan(),
        }
    }
}

/// Applique `f` (ou son inverse si `arc`) à `x`, dans l’unité `unite`.
pub fn trig(f: TrigFn, x: f64, arc: bool, unite: UniteAngle) -> f64 {
    if arc {
        let r = f.inverse(x);
        return match unite {
            UniteAngle::Degres => r.to_degrees(),
            UniteAngle::Radians => r,
        };
    }
    match unite {
        UniteAngle::Degres => trig_degres(f, x),
        UniteAngle::Radians => f.directe(x),
    }
}

/// Fonction directe sur un angle en degrés.
pub fn trig_degres(f: TrigFn, degres: f64) -> f64 {
    if !degres.is_finite() {
        return f64::NAN;
    }
    let reduit = degres.rem_euclid(360.0);
    angle_droit(f, reduit).unwrap_or_else(|| f.directe(reduit.to_radians()))
}

/// Table des multiples de 90° (angle déjà réduit dans [0, 360]).
fn angle_droit(f: TrigFn, reduit: f64) -> Option<f64> {
    if reduit % 90.0 != 0.0 {
        return None;
    }
    // rem_euclid peut rendre 360.0 pour un angle négatif minuscule
    let quart = (reduit / 90.0) as u8 % 4;

    let v = match (f, quart) {
        (TrigFn::Sin, 0) | (TrigFn::Sin, 2) => 0.0,
        (TrigFn::Sin, 1) => 1.0,
        (TrigFn::Sin, _) => -1.0,

        (TrigFn::Cos, 0) => 1.0,
        (TrigFn::Cos, 2) => -1.0,
        (TrigFn::Cos, _) => 0.0,

        (TrigFn::Tan, 0) | (TrigFn::Tan, 2) => 0.0,
        (TrigFn::Tan, 1) => f64::INFINITY,
        (TrigFn::Tan, _) => f64::NEG_INFINITY,
    };
    Some(v)
}
