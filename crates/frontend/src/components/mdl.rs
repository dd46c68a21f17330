//! Bridge to the MDL runtime loaded by the host page.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = componentHandler, js_name = upgradeDom, catch)]
    fn component_handler_upgrade_dom() -> Result<(), JsValue>;
}

/// Upgrade MDL elements inserted after page load.
///
/// MDL only upgrades the markup present when its script runs, so anything
/// rendered later needs an explicit pass.
pub fn upgrade_dom() {
    if let Err(err) = component_handler_upgrade_dom() {
        log::warn!("MDL upgrade skipped, is material.js loaded? {err:?}");
    }
}
