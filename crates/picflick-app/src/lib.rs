//! PicFlick App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It builds the LLM adapter from config and hands it to the egui UI.
//! On native targets it compiles to an empty library.

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "picflick_canvas";

/// WASM entry point, called from index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn main() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("PicFlick starting...");

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::PicFlickApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
