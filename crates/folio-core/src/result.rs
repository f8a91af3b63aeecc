//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! Behaviors never surface failures to the page; the host turns a failed
//! result into a log line and skips the feature with [`ResultExt`].

use crate::error::Error;

/// The standard Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for collapsing a fallible step into "run or skip".
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error at warn level.
    fn into_option_logged(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn into_option_logged(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(context, "skipping: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged("answer"), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<i32> = Err(Error::NoSlides);
        assert_eq!(result.into_option_logged("slider"), None);
    }

    #[test]
    fn test_result_into_option_accepts_any_display_error() {
        let result: std::result::Result<u32, String> = Err("boom".to_string());
        assert_eq!(result.into_option_logged("dom"), None);
    }
}
