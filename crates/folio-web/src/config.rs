//! Page-supplied configuration
//!
//! Reads the JSON in `<script type="application/json" id="folio-config">`.
//! A missing block means defaults; an invalid one means defaults plus a
//! warning once logging is up.

use folio_core::{Error, SiteConfig};

use crate::dom::Page;
use crate::selectors::CONFIG_ID;

/// Configuration in effect and the reason defaults were used, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: SiteConfig,
    pub fallback: Option<Error>,
}

impl LoadedConfig {
    /// Parse the raw text of a config block.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::defaults();
        }
        match SiteConfig::from_json(raw) {
            Ok(config) => Self {
                config,
                fallback: None,
            },
            Err(error) => Self {
                config: SiteConfig::default(),
                fallback: Some(error),
            },
        }
    }

    fn defaults() -> Self {
        Self {
            config: SiteConfig::default(),
            fallback: None,
        }
    }
}

/// Load the configuration block from the page.
#[must_use]
pub fn load(page: &Page) -> LoadedConfig {
    page.by_id(CONFIG_ID)
        .and_then(|element| element.text_content())
        .map_or_else(LoadedConfig::defaults, |raw| LoadedConfig::from_text(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_block_uses_defaults_silently() {
        let loaded = LoadedConfig::from_text("  \n ");
        assert_eq!(loaded.config, SiteConfig::default());
        assert!(loaded.fallback.is_none());
    }

    #[test]
    fn test_valid_block_is_used() {
        let loaded = LoadedConfig::from_text(r#"{ "slider": { "autoplay_interval_ms": 8000 } }"#);
        assert_eq!(loaded.config.slider.autoplay_interval_ms, 8000);
        assert!(loaded.fallback.is_none());
    }

    #[test]
    fn test_invalid_block_falls_back_with_reason() {
        let loaded = LoadedConfig::from_text(r#"{ "typewriter": { "phrases": [] } }"#);
        assert_eq!(loaded.config, SiteConfig::default());
        assert_eq!(loaded.fallback, Some(Error::NoPhrases));
    }
}
