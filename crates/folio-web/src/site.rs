//! Page boot
//!
//! Loads configuration, installs logging, reads the reduced-motion flag, and
//! mounts every component. A component that fails is logged and left out;
//! the rest still mount.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use folio_core::{Motion, ResultExt};
use folio_core::typewriter::TypewriterHandle;

use crate::components::{footer, nav, parallax, reveal, scroll, skills, slider, typewriter};
use crate::config;
use crate::dom::Page;
use crate::error::Result;
use crate::logging;
use crate::scheduler::BrowserScheduler;

/// Everything mounted on the page.
pub struct Site {
    pub motion: Motion,
    pub nav: Option<nav::Nav>,
    pub scroll: Option<scroll::SmoothScroll>,
    pub typewriter: Option<TypewriterHandle>,
    pub parallax: Option<parallax::Parallax>,
    pub skills: Option<skills::Skills>,
    pub slider: Option<slider::Slider>,
    pub year: Option<String>,
    pub reveal: bool,
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("motion", &self.motion)
            .field("nav", &self.nav.is_some())
            .field("scroll", &self.scroll)
            .field("typewriter", &self.typewriter.is_some())
            .field("parallax", &self.parallax.is_some())
            .field("skills", &self.skills.is_some())
            .field("slider", &self.slider.is_some())
            .field("year", &self.year)
            .field("reveal", &self.reveal)
            .finish()
    }
}

thread_local! {
    static SITE: RefCell<Option<Rc<Site>>> = const { RefCell::new(None) };
}

/// The mounted site, once [`boot`] has run.
#[must_use]
pub fn current() -> Option<Rc<Site>> {
    SITE.with(|site| site.borrow().clone())
}

/// Attach every behavior to the current page.
///
/// Booting twice returns the site mounted the first time.
///
/// # Errors
///
/// Returns an error only when there is no window or document.
pub fn boot() -> Result<Rc<Site>> {
    if let Some(site) = current() {
        return Ok(site);
    }

    let page = Page::current()?;
    let loaded = config::load(&page);
    logging::init(loaded.config.log_level);
    if let Some(reason) = &loaded.fallback {
        tracing::warn!("invalid page config, using defaults: {reason}");
    }
    let config = loaded.config;

    let motion = page.reduced_motion();
    let scheduler = Rc::new(BrowserScheduler::new(page.window().clone()));
    tracing::debug!(reduced_motion = motion.is_reduced(), "booting page behaviors");

    let site = Rc::new(Site {
        motion,
        nav: settle("nav", nav::mount(&page, &config.nav)),
        scroll: settle("scroll", scroll::mount(&page, motion)),
        typewriter: settle(
            "typewriter",
            typewriter::mount(&page, &config.typewriter, Rc::clone(&scheduler), motion),
        ),
        parallax: settle("parallax", parallax::mount(&page, &config.parallax, motion)),
        skills: settle(
            "skills",
            skills::mount(&page, &config.skills, Rc::clone(&scheduler)),
        ),
        slider: settle(
            "slider",
            slider::mount(&page, &config.slider, scheduler, motion),
        ),
        year: settle("footer", footer::mount(&page)),
        reveal: settle("reveal", reveal::mount(&page)).is_some(),
    });

    SITE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&site)));
    tracing::info!("page behaviors ready");
    Ok(site)
}

fn settle<T>(component: &'static str, mounted: Result<Option<T>>) -> Option<T> {
    let handle = mounted.into_option_logged(component).flatten();
    if handle.is_some() {
        tracing::debug!(component, "component mounted");
    }
    handle
}
