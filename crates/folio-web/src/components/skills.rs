//! Skill indicator reveal

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::SkillsConfig;
use folio_core::skills::{RevealOnce, SkillMeter, animate_readout, parse_level, readout_text};
use web_sys::{Element, IntersectionObserver};

use crate::components::skipped;
use crate::dom::{self, Page, query_in};
use crate::error::Result;
use crate::observer::{self, ObserveOptions, Visibility};
use crate::scheduler::BrowserScheduler;
use crate::selectors::{self, attr};

struct Indicator {
    root: Element,
    bar: Option<Element>,
    value: Option<Element>,
    meter: SkillMeter,
}

impl Indicator {
    fn reveal(&self, scheduler: &Rc<BrowserScheduler>) {
        if let Some(bar) = &self.bar {
            if let Err(e) = dom::set_style(bar, "width", &self.meter.bar_width()) {
                tracing::warn!("failed to fill skill bar: {e}");
            }
        }
        if let Some(value) = self.value.clone() {
            animate_readout(self.meter, Rc::clone(scheduler), move |shown| {
                value.set_text_content(Some(&readout_text(shown)));
            });
        }
    }
}

/// Observer watching the indicators that have not animated yet.
#[derive(Debug)]
pub struct Skills {
    _observer: IntersectionObserver,
    revealed: Rc<RefCell<RevealOnce>>,
}

impl Skills {
    #[must_use]
    pub fn has_revealed(&self, index: usize) -> bool {
        self.revealed.borrow().has_fired(index)
    }
}

/// Animate each `.skillbar` the first time it is half visible.
///
/// # Errors
///
/// Returns an error if the observer cannot be created.
pub fn mount(
    page: &Page,
    config: &SkillsConfig,
    scheduler: Rc<BrowserScheduler>,
) -> Result<Option<Skills>> {
    let roots = page.query_all(selectors::SKILLBAR);
    if roots.is_empty() {
        return skipped("skills", "no skill indicators");
    }

    let indicators: Vec<Indicator> = roots
        .iter()
        .map(|root| Indicator {
            root: root.clone(),
            bar: query_in(root, selectors::SKILLBAR_BAR),
            value: query_in(root, selectors::SKILLBAR_VALUE),
            meter: SkillMeter::new(
                parse_level(root.get_attribute(attr::LEVEL).as_deref()),
                config.duration_ms,
            ),
        })
        .collect();

    let revealed = Rc::new(RefCell::new(RevealOnce::new(indicators.len())));
    let tracker = Rc::clone(&revealed);
    let options = ObserveOptions::threshold(config.visibility_threshold);

    let observer = observer::observe(
        &roots,
        options,
        move |batch: &[Visibility], observer: &IntersectionObserver| {
            for seen in batch.iter().filter(|seen| seen.is_intersecting) {
                let Some(index) = indicators.iter().position(|i| i.root == seen.target) else {
                    continue;
                };
                observer.unobserve(&seen.target);
                let first = tracker.borrow_mut().trigger(index);
                if let (true, Some(indicator)) = (first, indicators.get(index)) {
                    tracing::debug!(index, level = indicator.meter.level(), "skill revealed");
                    indicator.reveal(&scheduler);
                }
            }
        },
    )?;

    Ok(Some(Skills {
        _observer: observer,
        revealed,
    }))
}
