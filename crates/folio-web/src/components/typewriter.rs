//! Hero typewriter

use std::rc::Rc;

use folio_core::Motion;
use folio_core::config::TypewriterConfig;
use folio_core::typewriter::{self, Typewriter, TypewriterHandle};

use crate::components::skipped;
use crate::dom::Page;
use crate::error::Result;
use crate::scheduler::BrowserScheduler;
use crate::selectors;

/// Start the phrase cycle in `#typewriter`.
///
/// Under reduced motion the first phrase is written once and no handle is
/// kept.
///
/// # Errors
///
/// Returns an error if the phrase list is unusable.
pub fn mount(
    page: &Page,
    config: &TypewriterConfig,
    scheduler: Rc<BrowserScheduler>,
    motion: Motion,
) -> Result<Option<TypewriterHandle>> {
    let Some(target) = page.by_id(selectors::TYPEWRITER_ID) else {
        return skipped("typewriter", "no typewriter target");
    };
    if config.phrases.is_empty() {
        return skipped("typewriter", "no phrases");
    }

    let machine = Typewriter::new(config.phrases.as_slice(), config.timing)?;
    let handle = typewriter::run(machine, scheduler, motion, move |text| {
        target.set_text_content(Some(text));
    });

    Ok(handle)
}
