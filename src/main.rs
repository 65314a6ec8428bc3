// src/main.rs
//
// Calculatrice HP-35 — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - NATIF seulement            : journal (RUST_LOG) + réglages JSON (HP35_REGLAGES)
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - le noyau vit dans la lib (src/lib.rs), sans egui
// - `impl eframe::App for AppCalc` vit dans src/app.rs

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice HP-35";

/* ------------------------ Journal + réglages (natif) ------------------------ */

/// Variable d’environnement : chemin d’un fichier de réglages JSON.
#[cfg(not(target_arch = "wasm32"))]
const VAR_REGLAGES: &str = "HP35_REGLAGES";

/// Journal sur stderr, filtré par RUST_LOG (défaut : "warn").
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // try_init : un second appel (tests, rechargement) ne doit pas paniquer
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Réglages lus depuis $HP35_REGLAGES ; toute erreur retombe sur les défauts.
#[cfg(not(target_arch = "wasm32"))]
fn charger_reglages() -> calculatrice_hp35::noyau::Reglages {
    use calculatrice_hp35::noyau::Reglages;

    let Some(chemin) = std::env::var_os(VAR_REGLAGES) else {
        return Reglages::default();
    };

    let texte = match std::fs::read_to_string(&chemin) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(chemin = ?chemin, erreur = %e, "réglages illisibles, défauts utilisés");
            return Reglages::default();
        }
    };

    match Reglages::depuis_json(&texte) {
        Ok(r) => {
            tracing::debug!(?r, "réglages chargés");
            r
        }
        Err(e) => {
            tracing::warn!(chemin = ?chemin, erreur = %e, "défauts utilisés");
            Reglages::default()
        }
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();
    let reglages = charger_reglages();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([380.0, 720.0])
            .with_min_inner_size([340.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (réglages par défaut)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
