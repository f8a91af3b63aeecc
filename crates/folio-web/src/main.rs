//! WASM entry point
//!
//! Trunk compiles this binary and runs it once the page script loads.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = folio_web::boot() {
        web_sys::console::error_1(&format!("folio failed to start: {e}").into());
    }
}
