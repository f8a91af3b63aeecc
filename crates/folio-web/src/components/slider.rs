//! Testimonial slider

use std::rc::Rc;

use folio_core::{Motion, ResultExt};
use folio_core::config::SliderConfig;
use folio_core::slider::{Carousel, SlideView};
use web_sys::{Document, Element, Event, MouseEvent};

use crate::components::skipped;
use crate::dom::{self, Page, listen};
use crate::error::{Result, WebError};
use crate::scheduler::BrowserScheduler;
use crate::selectors::{self, class};

/// Live carousel bound to the page's `.slider`.
pub type Slider = Carousel<BrowserScheduler>;

/// Build the dots, bind the controls, show slide 0, and start autoplay.
///
/// # Errors
///
/// Returns an error if the dots cannot be created or a listener cannot be
/// attached.
pub fn mount(
    page: &Page,
    config: &SliderConfig,
    scheduler: Rc<BrowserScheduler>,
    motion: Motion,
) -> Result<Option<Slider>> {
    let Some(track) = page.query(selectors::SLIDE_TRACK) else {
        return skipped("slider", "no slide track");
    };
    let count = page.query_all(selectors::SLIDE).len();
    if count == 0 {
        return skipped("slider", "no slides");
    }

    let dots = match page.query(selectors::SLIDER_DOTS) {
        Some(container) => build_dots(page.document(), &container, count)?,
        None => Vec::new(),
    };

    let painted_dots = dots.clone();
    let carousel = Carousel::new(
        count,
        scheduler,
        motion,
        config.autoplay_interval_ms,
        move |view: SlideView| paint(&track, &painted_dots, view),
    )?;

    bind_controls(page, &carousel, &dots)?;
    carousel.init();
    tracing::debug!(slides = count, "slider mounted");
    Ok(Some(carousel))
}

fn build_dots(document: &Document, container: &Element, count: usize) -> Result<Vec<Element>> {
    container.set_inner_html("");
    (1..=count)
        .map(|number| -> Result<Element> {
            let dot = document
                .create_element("button")
                .map_err(|e| WebError::dom(&e))?;
            dot.set_class_name(class::SLIDER_DOT);
            dom::set_attr(&dot, "type", "button")?;
            dom::set_attr(&dot, "role", "tab")?;
            dom::set_attr(&dot, "aria-label", &format!("Go to slide {number}"))?;
            container
                .append_child(&dot)
                .map_err(|e| WebError::dom(&e))?;
            Ok(dot)
        })
        .collect()
}

fn paint(track: &Element, dots: &[Element], view: SlideView) {
    dom::set_style(track, "transform", &view.track_transform()).into_option_logged("slide track");
    for (index, dot) in dots.iter().enumerate() {
        let selected = if view.is_selected(index) { "true" } else { "false" };
        if let Err(e) = dom::set_attr(dot, "aria-selected", selected) {
            tracing::warn!("failed to mark slider dot: {e}");
        }
    }
}

fn bind_controls(page: &Page, carousel: &Slider, dots: &[Element]) -> Result<()> {
    if let Some(next) = page.query(selectors::SLIDER_NEXT) {
        let carousel = carousel.clone();
        listen(&next, "click", move |_: MouseEvent| carousel.on_next_clicked())?;
    }
    if let Some(prev) = page.query(selectors::SLIDER_PREV) {
        let carousel = carousel.clone();
        listen(&prev, "click", move |_: MouseEvent| carousel.on_prev_clicked())?;
    }

    for (index, dot) in dots.iter().enumerate() {
        let carousel = carousel.clone();
        listen(dot, "click", move |_: MouseEvent| carousel.on_dot_clicked(index))?;
    }

    // The wrapper only scopes hover pausing.
    if let Some(root) = page.query(selectors::SLIDER) {
        let hovered = carousel.clone();
        listen(&root, "mouseenter", move |_: Event| hovered.on_pointer_enter())?;
        let left = carousel.clone();
        listen(&root, "mouseleave", move |_: Event| left.on_pointer_leave())?;
    }

    Ok(())
}
