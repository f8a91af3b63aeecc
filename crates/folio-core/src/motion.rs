//! Reduced-motion preference

/// Media query the host evaluates once at boot.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Visitor's motion preference, fixed for the lifetime of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    /// Animations allowed
    #[default]
    Full,
    /// Visitor asked for minimal motion
    Reduced,
}

impl Motion {
    /// Build from the result of matching [`REDUCED_MOTION_QUERY`].
    #[must_use]
    pub const fn from_reduce_query(matches: bool) -> Self {
        if matches { Self::Reduced } else { Self::Full }
    }

    #[must_use]
    pub const fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reduce_query() {
        assert_eq!(Motion::from_reduce_query(true), Motion::Reduced);
        assert_eq!(Motion::from_reduce_query(false), Motion::Full);
    }

    #[test]
    fn test_default_is_full_motion() {
        assert!(!Motion::default().is_reduced());
    }
}
