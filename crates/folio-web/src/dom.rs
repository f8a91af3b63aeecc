//! Panic-free DOM access helpers
//!
//! Lookups return `Option`/`Vec` so a missing element only disables the
//! feature that needed it. Listeners are kept alive for the lifetime of the
//! page with `Closure::forget`.

use folio_core::Motion;
use folio_core::motion::REDUCED_MOTION_QUERY;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{Result, WebError};

/// Window and document of the running page.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    /// Get the current browser page.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser context (no window or document).
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(WebError::WindowNotAvailable)?;
        let document = window.document().ok_or(WebError::DocumentNotAvailable)?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// First element matching `selector`.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// Every element matching `selector`, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(|list| {
                (0..list.length())
                    .filter_map(|i| list.item(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Read the reduced-motion preference once.
    #[must_use]
    pub fn reduced_motion(&self) -> Motion {
        let matches = self
            .window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        Motion::from_reduce_query(matches)
    }

    /// Vertical scroll offset, 0 when unavailable.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Viewport width and height, 0 when unavailable.
    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        let extent = |value: std::result::Result<wasm_bindgen::JsValue, _>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        (
            extent(self.window.inner_width()),
            extent(self.window.inner_height()),
        )
    }
}

/// First descendant of `root` matching `selector`.
#[must_use]
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Set an inline style property on an element.
///
/// # Errors
///
/// Returns an error if the element is not an `HtmlElement` or the browser
/// rejects the property.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| WebError::ElementCast {
            selector: element.tag_name().to_lowercase(),
        })?;
    html.style()
        .set_property(property, value)
        .map_err(|e| WebError::dom(&e))
}

/// Add or remove `class` depending on `on`.
///
/// # Errors
///
/// Returns an error if the browser rejects the class token.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| WebError::dom(&e))
}

/// Set an attribute.
///
/// # Errors
///
/// Returns an error if the browser rejects the attribute name.
pub fn set_attr(element: &Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| WebError::dom(&e))
}

/// Attach `handler` for `event` on `target` for the rest of the page's life.
///
/// Events that do not cast to `E` are ignored.
///
/// # Errors
///
/// Returns an error if `addEventListener` throws.
pub fn listen<E, F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = wrap_handler(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| WebError::listener(event, &e))?;

    // Keep closure alive
    closure.forget();
    Ok(())
}

/// Like [`listen`], registered as a passive listener.
///
/// # Errors
///
/// Returns an error if `addEventListener` throws.
pub fn listen_passive<E, F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = wrap_handler(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| WebError::listener(event, &e))?;

    closure.forget();
    Ok(())
}

fn wrap_handler<E, F>(mut handler: F) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_current_page_succeeds() -> Result<()> {
        let _page = Page::current()?;
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_query_missing_element_is_none() -> Result<()> {
        let page = Page::current()?;
        assert!(page.query("#definitely-not-here").is_none());
        assert!(page.query_all(".definitely-not-here").is_empty());
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_set_class_toggles() -> Result<()> {
        let page = Page::current()?;
        let div = page.document().create_element("div").map_err(|e| WebError::dom(&e))?;

        set_class(&div, "open", true)?;
        assert!(div.class_list().contains("open"));
        set_class(&div, "open", false)?;
        assert!(!div.class_list().contains("open"));
        Ok(())
    }
}
