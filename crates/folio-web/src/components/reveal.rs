//! Scroll-reveal library hook
//!
//! Pages may load the AOS library, which exposes `window.AOS.init()`.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::components::skipped;
use crate::dom::Page;
use crate::error::{Result, WebError};

/// Call `AOS.init()` if the library is on the page.
///
/// # Errors
///
/// Returns an error if `init` throws.
pub fn mount(page: &Page) -> Result<Option<()>> {
    let Some(aos) = Reflect::get(page.window(), &JsValue::from_str("AOS"))
        .ok()
        .filter(|value| value.is_object())
    else {
        return skipped("reveal", "AOS not loaded");
    };
    let Some(init) = Reflect::get(&aos, &JsValue::from_str("init"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return skipped("reveal", "AOS.init missing");
    };

    init.call0(&aos).map_err(|e| WebError::dom(&e))?;
    Ok(Some(()))
}
