//! Host-independent behaviors for the folio portfolio page
//!
//! Every page behavior is modelled here as a small state machine that knows
//! nothing about the DOM. The browser crate (`folio-web`) reads elements,
//! feeds events in, and paints whatever these types report back.
//!
//! ## Module Structure
//! - `config`: `SiteConfig` and its JSON loading/validation
//! - `error` / `result`: error type and `Result` helpers
//! - `motion`: reduced-motion preference
//! - `schedule`: `Scheduler` trait and the `VirtualScheduler` test clock
//! - `nav`: menu toggle, active-section highlighting, header mode
//! - `scroll`: anchor scroll planning
//! - `typewriter`: phrase typing/erasing cycle
//! - `parallax`: orb offsets from scroll and pointer
//! - `skills`: skill bar levels and readout animation
//! - `slider`: testimonial carousel and autoplay
//! - `year`: footer year text

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod result;
pub mod schedule;
pub mod scroll;
pub mod skills;
pub mod slider;
pub mod typewriter;
pub mod year;

pub use config::SiteConfig;
pub use error::Error;
pub use motion::Motion;
pub use result::{Result, ResultExt};
pub use schedule::{Scheduler, VirtualScheduler};
