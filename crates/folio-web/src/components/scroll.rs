//! Smooth in-page anchor scrolling

use folio_core::Motion;
use folio_core::scroll::{ScrollMode, ScrollPlan, plan_anchor_scroll};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::skipped;
use crate::dom::{Page, listen};
use crate::error::Result;
use crate::selectors;

/// Number of links whose clicks are intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    pub links: usize,
}

/// Intercept clicks on fragment links.
///
/// # Errors
///
/// Returns an error if a click listener cannot be attached.
pub fn mount(page: &Page, motion: Motion) -> Result<Option<SmoothScroll>> {
    let anchors: Vec<Element> = page
        .query_all(selectors::NAV_LINK)
        .into_iter()
        .filter(|link| {
            link.get_attribute("href")
                .is_some_and(|href| href.starts_with('#'))
        })
        .collect();
    if anchors.is_empty() {
        return skipped("scroll", "no fragment links");
    }

    for anchor in &anchors {
        let page = page.clone();
        let link = anchor.clone();
        listen(anchor, "click", move |event: MouseEvent| {
            let href = link.get_attribute("href");
            let Some(plan) = plan_anchor_scroll(href.as_deref(), motion) else {
                return;
            };
            let Some(target) = page.by_id(plan.target_id) else {
                return;
            };
            event.prevent_default();
            scroll_to(&target, plan);
        })?;
    }

    Ok(Some(SmoothScroll {
        links: anchors.len(),
    }))
}

fn scroll_to(target: &Element, plan: ScrollPlan<'_>) {
    match plan.mode {
        ScrollMode::Instant => target.scroll_into_view(),
        ScrollMode::Smooth => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
