//! Page behaviors
//!
//! Each module exposes a `mount` returning `Ok(None)` when the elements it
//! needs are missing, so one absent section never blocks the others.

pub mod footer;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod slider;
pub mod typewriter;

/// Log a skipped component and return the empty mount result.
pub(crate) fn skipped<T>(component: &'static str, reason: &'static str) -> crate::Result<Option<T>> {
    tracing::debug!(component, reason, "component skipped");
    Ok(None)
}
