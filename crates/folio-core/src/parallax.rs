//! Decorative orb parallax
//!
//! Pointer and scroll signals are owned by a [`ParallaxField`] and passed
//! into the pure [`ParallaxField::offset_for`] computation.

use serde::{Deserialize, Serialize};

use crate::motion::Motion;

/// Tunables for orb positioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    /// Multiplier applied to the normalized pointer offset
    pub pointer_scale: f64,
    /// Speed used when an orb declares none (or an unparsable one)
    pub default_speed: f64,
    /// Third `translate3d` component, any CSS length expression
    pub depth: String,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            pointer_scale: 20.0,
            default_speed: 0.08,
            depth: "var(--z, -60px)".to_string(),
        }
    }
}

/// Parse a `data-speed` value, falling back to `default` when missing or not finite.
#[must_use]
pub fn parse_speed(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(default)
}

/// Pointer position relative to the viewport center, each axis in `[-0.5, 0.5]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Normalize client coordinates against the viewport size.
    ///
    /// A degenerate viewport yields the centered offset.
    #[must_use]
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        let axis = |position: f64, extent: f64| {
            if extent > 0.0 && position.is_finite() {
                (position / extent - 0.5).clamp(-0.5, 0.5)
            } else {
                0.0
            }
        };

        Self {
            x: axis(client_x, width),
            y: axis(client_y, height),
        }
    }
}

/// Translation for a single orb, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbOffset {
    pub x: f64,
    pub y: f64,
}

impl OrbOffset {
    /// CSS `translate3d` transform using `depth` as the z component.
    #[must_use]
    pub fn css(&self, depth: &str) -> String {
        // Adding zero turns a negative zero into "0" rather than "-0".
        format!("translate3d({}px, {}px, {depth})", self.x + 0.0, self.y + 0.0)
    }
}

/// Parallax state for the page's orbs.
#[derive(Debug, Clone)]
pub struct ParallaxField {
    pointer: PointerOffset,
    motion: Motion,
    settings: ParallaxSettings,
}

impl ParallaxField {
    #[must_use]
    pub fn new(settings: ParallaxSettings, motion: Motion) -> Self {
        Self {
            pointer: PointerOffset::default(),
            motion,
            settings,
        }
    }

    #[must_use]
    pub const fn pointer(&self) -> PointerOffset {
        self.pointer
    }

    #[must_use]
    pub const fn settings(&self) -> &ParallaxSettings {
        &self.settings
    }

    /// Record a pointer move. Ignored under reduced motion.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        if self.motion.is_reduced() {
            return;
        }
        self.pointer = PointerOffset::from_client(client_x, client_y, width, height);
    }

    /// Offset for an orb moving at `speed` with the page scrolled by `scroll_y`.
    #[must_use]
    pub fn offset_for(&self, scroll_y: f64, speed: f64) -> OrbOffset {
        let scale = self.settings.pointer_scale * speed;
        OrbOffset {
            x: self.pointer.x * scale,
            y: scroll_y * speed + self.pointer.y * scale,
        }
    }

    /// Full transform string for an orb.
    #[must_use]
    pub fn transform_for(&self, scroll_y: f64, speed: f64) -> String {
        self.offset_for(scroll_y, speed).css(&self.settings.depth)
    }
}
