//! Mobile menu, active link highlighting, and sticky header

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::config::NavConfig;
use folio_core::nav::{HeaderMode, MenuState, SectionEntry, SectionHighlighter};
use web_sys::{Element, IntersectionObserver, MouseEvent};

use crate::components::skipped;
use crate::dom::{self, Page, listen};
use crate::error::{Result, WebError};
use crate::observer::{self, ObserveOptions, Visibility};
use crate::selectors::{self, class};

/// Live navigation wiring
#[derive(Debug)]
pub struct Nav {
    menu: Option<Rc<Cell<MenuState>>>,
    highlighter: Rc<RefCell<SectionHighlighter>>,
    _sections: Option<IntersectionObserver>,
    _hero: Option<IntersectionObserver>,
}

impl Nav {
    /// Menu state, when the toggle and panel are present.
    #[must_use]
    pub fn menu(&self) -> Option<MenuState> {
        self.menu.as_ref().map(|menu| menu.get())
    }

    /// Index of the highlighted link.
    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.highlighter.borrow().active()
    }
}

/// Attach every navigation behavior whose elements exist.
///
/// # Errors
///
/// Returns an error if a listener or observer cannot be registered.
pub fn mount(page: &Page, config: &NavConfig) -> Result<Option<Nav>> {
    let links = page.query_all(selectors::NAV_LINK);
    let header = page.query(selectors::HEADER);
    if links.is_empty() && header.is_none() {
        return skipped("nav", "no nav links or header");
    }

    let menu = mount_menu(page, &links)?;

    let highlighter = Rc::new(RefCell::new(SectionHighlighter::new(
        links.iter().map(|link| link.get_attribute("href")),
    )));
    let sections = mount_highlighter(page, config, links, Rc::clone(&highlighter))?;
    let hero = header
        .map(|header| mount_header(page, config, header))
        .transpose()?
        .flatten();

    Ok(Some(Nav {
        menu,
        highlighter,
        _sections: sections,
        _hero: hero,
    }))
}

fn mount_menu(page: &Page, links: &[Element]) -> Result<Option<Rc<Cell<MenuState>>>> {
    let (Some(toggle), Some(panel)) = (
        page.query(selectors::NAV_TOGGLE),
        page.query(selectors::NAV_LINKS),
    ) else {
        tracing::debug!("nav menu toggle or panel missing");
        return Ok(None);
    };

    let menu = Rc::new(Cell::new(MenuState::new(
        panel.class_list().contains(class::OPEN),
    )));

    let state = Rc::clone(&menu);
    let (toggle_el, panel_el) = (toggle.clone(), panel.clone());
    listen(&toggle, "click", move |_: MouseEvent| {
        let mut current = state.get();
        current.toggle();
        state.set(current);
        paint_menu(&toggle_el, &panel_el, current);
    })?;

    for link in links {
        let state = Rc::clone(&menu);
        let (toggle_el, panel_el) = (toggle.clone(), panel.clone());
        listen(link, "click", move |_: MouseEvent| {
            let mut current = state.get();
            current.close();
            state.set(current);
            paint_menu(&toggle_el, &panel_el, current);
        })?;
    }

    Ok(Some(menu))
}

fn paint_menu(toggle: &Element, panel: &Element, menu: MenuState) {
    let painted = dom::set_class(panel, class::OPEN, menu.is_open())
        .and_then(|()| dom::set_attr(toggle, "aria-expanded", menu.aria_expanded()));
    if let Err(e) = painted {
        tracing::warn!("failed to update nav menu: {e}");
    }
}

fn mount_highlighter(
    page: &Page,
    config: &NavConfig,
    links: Vec<Element>,
    highlighter: Rc<RefCell<SectionHighlighter>>,
) -> Result<Option<IntersectionObserver>> {
    let sections = page.query_all(selectors::SECTIONS);
    if sections.is_empty() || links.is_empty() {
        return Ok(None);
    }

    let options = ObserveOptions::threshold(config.section_threshold);
    let observer = observer::observe(&sections, options, move |batch: &[Visibility], _| {
        let ids: Vec<String> = batch.iter().map(|seen| seen.target.id()).collect();
        let entries: Vec<SectionEntry<'_>> = batch
            .iter()
            .zip(&ids)
            .map(|(seen, id)| SectionEntry {
                id,
                is_intersecting: seen.is_intersecting,
            })
            .collect();

        let activated = highlighter.borrow_mut().observe(&entries);
        if let Some(active) = activated {
            paint_links(&links, active);
        }
    })?;

    Ok(Some(observer))
}

fn paint_links(links: &[Element], active: usize) {
    for (index, link) in links.iter().enumerate() {
        let is_active = index == active;
        let painted = dom::set_class(link, class::ACTIVE, is_active).and_then(|()| {
            if is_active {
                dom::set_attr(link, "aria-current", "true")
            } else {
                link.remove_attribute("aria-current")
                    .map_err(|e| WebError::dom(&e))
            }
        });
        if let Err(e) = painted {
            tracing::warn!("failed to update nav link: {e}");
        }
    }
}

fn mount_header(
    page: &Page,
    config: &NavConfig,
    header: Element,
) -> Result<Option<IntersectionObserver>> {
    let Some(hero) = page.query(selectors::HERO) else {
        tracing::debug!("hero missing, header stays as authored");
        return Ok(None);
    };

    let options = ObserveOptions {
        threshold: 0.0,
        root_margin: Some(config.hero_root_margin.as_str()),
    };
    let observer = observer::observe(&[hero], options, move |batch: &[Visibility], _| {
        let Some(first) = batch.first() else {
            return;
        };
        let mode = HeaderMode::from_hero_visibility(first.is_intersecting);
        if let Err(e) = dom::set_class(&header, class::SCROLLED, mode.is_scrolled()) {
            tracing::warn!("failed to update header: {e}");
        }
    })?;

    Ok(Some(observer))
}
