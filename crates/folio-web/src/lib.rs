//! Browser bindings for the folio portfolio page
//!
//! Attaches the behaviors from `folio-core` to the static page markup:
//! navigation, anchor scrolling, the hero typewriter, orb parallax, skill
//! indicators, the testimonial slider, and the footer year.
//!
//! ## Module Structure
//! - `site`: boot sequence and mounted handles
//! - `components`: one module per page behavior
//! - `dom`: element lookup and listener helpers
//! - `observer`: `IntersectionObserver` wrapper
//! - `scheduler`: timers and animation frames
//! - `config`: page-supplied JSON configuration
//! - `logging`: console subscriber for `tracing`
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod observer;
pub mod scheduler;
pub mod selectors;
pub mod site;

pub use error::{Result, WebError};
pub use site::{Site, boot};
