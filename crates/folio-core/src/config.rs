//! Site behavior configuration
//!
//! Every field has a default matching the stock page, so an absent or
//! partial config block is always valid input. The host reads the JSON from
//! the page and falls back to [`SiteConfig::default`] on any error.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::parallax::ParallaxSettings;
use crate::result::Result;
use crate::skills::READOUT_DURATION_MS;
use crate::slider::AUTOPLAY_INTERVAL_MS;
use crate::typewriter::TypewriterTiming;

/// Phrases shown by the hero typewriter on the stock page.
pub const DEFAULT_PHRASES: [&str; 3] = [
    "Engineer. Learner. Collaborator.",
    "Turning ideas into accessible experiences.",
    "Iterating with curiosity and craft.",
];

/// Console log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub const fn as_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    #[serde(flatten)]
    pub timing: TypewriterTiming,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            timing: TypewriterTiming::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub autoplay_interval_ms: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub duration_ms: u32,
    pub visibility_threshold: f64,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            duration_ms: READOUT_DURATION_MS,
            visibility_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Fraction of a section that must be visible to highlight its link
    pub section_threshold: f64,
    /// Observer root margin for the hero (header turns solid once it is crossed)
    pub hero_root_margin: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_threshold: 0.6,
            hero_root_margin: "-60px 0px 0px 0px".to_string(),
        }
    }
}

/// Top-level configuration for every page behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub typewriter: TypewriterConfig,
    pub slider: SliderConfig,
    pub skills: SkillsConfig,
    pub nav: NavConfig,
    pub parallax: ParallaxSettings,
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON and any error from
    /// [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| Error::config_parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// - [`Error::NoPhrases`] / [`Error::EmptyPhrase`] for unusable phrases
    /// - [`Error::InvalidDelay`] for a zero delay or interval
    /// - [`Error::InvalidThreshold`] for a threshold outside `0.0..=1.0`
    pub fn validate(&self) -> Result<()> {
        if self.typewriter.phrases.is_empty() {
            return Err(Error::NoPhrases);
        }
        if let Some(index) = self.typewriter.phrases.iter().position(String::is_empty) {
            return Err(Error::EmptyPhrase { index });
        }

        let timing = &self.typewriter.timing;
        let delays = [
            ("typing_delay_ms", timing.typing_delay_ms),
            ("erasing_delay_ms", timing.erasing_delay_ms),
            ("hold_delay_ms", timing.hold_delay_ms),
            ("autoplay_interval_ms", self.slider.autoplay_interval_ms),
            ("duration_ms", self.skills.duration_ms),
        ];
        if let Some((field, _)) = delays.iter().find(|(_, ms)| *ms == 0) {
            return Err(Error::invalid_delay(*field));
        }

        let thresholds = [
            ("section_threshold", self.nav.section_threshold),
            ("visibility_threshold", self.skills.visibility_threshold),
        ];
        if let Some((field, value)) = thresholds
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            return Err(Error::invalid_threshold(*field, *value));
        }

        Ok(())
    }
}
