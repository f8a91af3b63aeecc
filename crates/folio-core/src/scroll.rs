//! In-page anchor scrolling

use crate::motion::Motion;
use crate::nav::fragment_of;

/// How the viewport should move to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump straight to the target
    Instant,
    /// Animate to the target, aligned to the viewport top
    Smooth,
}

impl From<Motion> for ScrollMode {
    fn from(motion: Motion) -> Self {
        if motion.is_reduced() {
            Self::Instant
        } else {
            Self::Smooth
        }
    }
}

/// Where and how to scroll for a clicked link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPlan<'a> {
    pub target_id: &'a str,
    pub mode: ScrollMode,
}

/// Plan the scroll for a link's `href`.
///
/// `None` means the click is not an in-page anchor and must fall through to
/// the browser's default handling. The host still has to resolve
/// `target_id`; an unresolved target also falls through.
#[must_use]
pub fn plan_anchor_scroll(href: Option<&str>, motion: Motion) -> Option<ScrollPlan<'_>> {
    let target_id = fragment_of(href?)?;
    Some(ScrollPlan {
        target_id,
        mode: ScrollMode::from(motion),
    })
}
