//! Error types for DOM wiring
//!
//! A failing component is logged and skipped; these errors never reach the
//! visitor.

use wasm_bindgen::JsValue;

/// Errors raised while attaching behaviors to the page
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// Failed to get window object
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Failed to get document object
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Element exists but is not an `HtmlElement`
    #[error("element '{selector}' is not an HtmlElement")]
    ElementCast { selector: String },

    /// Failed to add an event listener
    #[error("failed to add '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },

    /// Failed to create an intersection observer
    #[error("failed to create intersection observer: {0}")]
    Observer(String),

    /// Any other rejected DOM call
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Behavior rejected its input
    #[error(transparent)]
    Core(#[from] folio_core::Error),
}

impl WebError {
    /// Wrap a rejected DOM call.
    #[must_use]
    pub fn dom(error: &JsValue) -> Self {
        Self::Dom(format!("{error:?}"))
    }

    /// Wrap a rejected `addEventListener` call.
    #[must_use]
    pub fn listener(event: &'static str, error: &JsValue) -> Self {
        Self::Listener {
            event,
            reason: format!("{error:?}"),
        }
    }
}

/// Result type alias for DOM wiring
pub type Result<T> = std::result::Result<T, WebError>;
