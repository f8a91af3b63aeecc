//! Decorative orb parallax

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Motion, ResultExt};
use folio_core::parallax::{ParallaxField, ParallaxSettings, parse_speed};
use web_sys::{Element, Event, MouseEvent};

use crate::components::skipped;
use crate::dom::{self, Page, listen, listen_passive};
use crate::error::Result;
use crate::selectors::{self, attr};

struct Orb {
    element: Element,
    speed: f64,
}

/// Orbs and the pointer state shared by their listeners.
pub struct Parallax {
    field: Rc<RefCell<ParallaxField>>,
    orbs: Rc<Vec<Orb>>,
    page: Page,
}

impl std::fmt::Debug for Parallax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parallax")
            .field("orbs", &self.orbs.len())
            .field("pointer", &self.field.borrow().pointer())
            .finish_non_exhaustive()
    }
}

impl Parallax {
    /// Reposition every orb from the current scroll offset and pointer.
    pub fn update(&self) {
        reposition(&self.page, &self.field.borrow(), &self.orbs);
    }

    fn parts(&self) -> (Rc<RefCell<ParallaxField>>, Rc<Vec<Orb>>, Page) {
        (
            Rc::clone(&self.field),
            Rc::clone(&self.orbs),
            self.page.clone(),
        )
    }
}

fn reposition(page: &Page, field: &ParallaxField, orbs: &[Orb]) {
    let scroll_y = page.scroll_y();
    for orb in orbs {
        let transform = field.transform_for(scroll_y, orb.speed);
        dom::set_style(&orb.element, "transform", &transform).into_option_logged("orb transform");
    }
}

/// Track scroll and pointer for every `.orb`.
///
/// # Errors
///
/// Returns an error if a window listener cannot be attached.
pub fn mount(page: &Page, settings: &ParallaxSettings, motion: Motion) -> Result<Option<Parallax>> {
    let orbs: Vec<Orb> = page
        .query_all(selectors::ORB)
        .into_iter()
        .map(|element| {
            let speed = parse_speed(
                element.get_attribute(attr::SPEED).as_deref(),
                settings.default_speed,
            );
            Orb { element, speed }
        })
        .collect();
    if orbs.is_empty() {
        return skipped("parallax", "no orbs");
    }

    let parallax = Parallax {
        field: Rc::new(RefCell::new(ParallaxField::new(settings.clone(), motion))),
        orbs: Rc::new(orbs),
        page: page.clone(),
    };
    let window = page.window();

    let (field, orbs, host) = parallax.parts();
    listen_passive(window, "scroll", move |_: Event| {
        reposition(&host, &field.borrow(), &orbs);
    })?;

    let (field, orbs, host) = parallax.parts();
    listen(window, "load", move |_: Event| {
        reposition(&host, &field.borrow(), &orbs);
    })?;

    let (field, orbs, host) = parallax.parts();
    listen(window, "mousemove", move |event: MouseEvent| {
        let (width, height) = host.viewport();
        field.borrow_mut().on_pointer_move(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            width,
            height,
        );
        reposition(&host, &field.borrow(), &orbs);
    })?;

    // The module can finish loading after `load` has already fired.
    parallax.update();
    Ok(Some(parallax))
}
