//! Intersection observation
//!
//! Wraps `IntersectionObserver` so callbacks receive plain
//! [`Visibility`] records in the order the browser reported them.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{Result, WebError};

/// Observer configuration
#[derive(Debug, Clone, Copy)]
pub struct ObserveOptions<'a> {
    /// Visible fraction that triggers a notification
    pub threshold: f64,
    /// CSS margin applied to the viewport root
    pub root_margin: Option<&'a str>,
}

impl ObserveOptions<'_> {
    #[must_use]
    pub const fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }
}

/// One notification for one observed element
#[derive(Debug, Clone)]
pub struct Visibility {
    pub target: Element,
    pub is_intersecting: bool,
}

impl Visibility {
    fn from_entry(entry: &IntersectionObserverEntry) -> Self {
        Self {
            target: entry.target(),
            is_intersecting: entry.is_intersecting(),
        }
    }
}

/// Observe every element in `targets`, calling `on_change` with each batch.
///
/// The observer is returned so callers can keep it or `unobserve` targets;
/// the callback closure lives for the rest of the page.
///
/// # Errors
///
/// Returns an error if the browser rejects the observer options.
pub fn observe<F>(
    targets: &[Element],
    options: ObserveOptions<'_>,
    mut on_change: F,
) -> Result<IntersectionObserver>
where
    F: FnMut(&[Visibility], &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch: Vec<Visibility> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Visibility::from_entry(&entry))
                .collect();
            on_change(&batch, &observer);
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| WebError::Observer(format!("{e:?}")))?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }

    Ok(observer)
}
