//! Browser tests for the page behaviors
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-web`. Each test
//! replaces the body with the markup it needs.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::rc::Rc;

use folio_core::Motion;
use folio_core::config::{SiteConfig, TypewriterConfig};
use folio_web::components::{footer, nav, parallax, scroll, skills, slider, typewriter};
use folio_web::dom::Page;
use folio_web::scheduler::BrowserScheduler;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(markup: &str) -> Page {
    let page = Page::current().unwrap();
    page.document().body().unwrap().set_inner_html(markup);
    page
}

fn scheduler(page: &Page) -> Rc<BrowserScheduler> {
    Rc::new(BrowserScheduler::new(page.window().clone()))
}

fn click(page: &Page, selector: &str) {
    page.query(selector)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Dispatch a cancelable click and report whether a listener prevented it.
fn click_prevented(page: &Page, selector: &str) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    page.query(selector).unwrap().dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn style_of(page: &Page, selector: &str, property: &str) -> String {
    page.query(selector)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

const SLIDER: &str = r#"
    <div class="slider">
      <div class="slides">
        <article class="slide">one</article>
        <article class="slide">two</article>
        <article class="slide">three</article>
      </div>
      <button class="slider__btn--prev">prev</button>
      <button class="slider__btn--next">next</button>
      <div class="slider__dots"><span>stale</span></div>
    </div>
"#;

#[wasm_bindgen_test]
fn given_slider_markup_when_mounted_then_dots_are_rebuilt() {
    let page = fixture(SLIDER);
    let config = SiteConfig::default();

    let mounted =
        slider::mount(&page, &config.slider, scheduler(&page), Motion::Reduced).unwrap();

    let carousel = mounted.unwrap();
    assert_eq!(carousel.current(), 0);
    assert!(!carousel.is_autoplaying());

    let dots = page.query_all(".slider__dots > *");
    assert_eq!(dots.len(), 3);
    assert_eq!(dots[0].get_attribute("aria-label").as_deref(), Some("Go to slide 1"));
    assert_eq!(dots[0].get_attribute("role").as_deref(), Some("tab"));
    assert_eq!(dots[0].get_attribute("aria-selected").as_deref(), Some("true"));
    assert_eq!(dots[2].get_attribute("aria-selected").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn given_mounted_slider_when_prev_clicked_then_wraps_to_last() {
    let page = fixture(SLIDER);
    let config = SiteConfig::default();
    let carousel = slider::mount(&page, &config.slider, scheduler(&page), Motion::Full)
        .unwrap()
        .unwrap();
    assert!(carousel.is_autoplaying());

    click(&page, ".slider__btn--prev");

    assert_eq!(carousel.current(), 2);
    assert!(!carousel.is_autoplaying());
    let track = page.query(".slides").unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(
        track.style().get_property_value("transform").unwrap(),
        "translateX(-200%)"
    );
}

#[wasm_bindgen_test]
fn given_slider_parts_without_wrapper_when_mounted_then_carousel_still_works() {
    let page = fixture(
        r#"
        <div class="slides">
          <article class="slide">one</article>
          <article class="slide">two</article>
        </div>
        <button class="slider__btn--next">next</button>
        <div class="slider__dots"></div>
    "#,
    );
    let config = SiteConfig::default();

    let carousel = slider::mount(&page, &config.slider, scheduler(&page), Motion::Reduced)
        .unwrap()
        .unwrap();

    assert_eq!(page.query_all(".slider__dots > *").len(), 2);
    assert_eq!(style_of(&page, ".slides", "transform"), "translateX(0%)");

    click(&page, ".slider__btn--next");

    assert_eq!(carousel.current(), 1);
    assert_eq!(style_of(&page, ".slides", "transform"), "translateX(-100%)");
}

#[wasm_bindgen_test]
fn given_slider_without_slides_when_mounted_then_skipped() {
    let page = fixture(r#"<div class="slider"><div class="slides"></div></div>"#);
    let config = SiteConfig::default();

    let mounted = slider::mount(&page, &config.slider, scheduler(&page), Motion::Full).unwrap();

    assert!(mounted.is_none());
}

#[wasm_bindgen_test]
fn given_nav_when_toggle_then_link_clicked_then_menu_closes() {
    let page = fixture(
        r##"
        <header id="site-nav">
          <button class="nav__toggle" aria-expanded="false">menu</button>
          <ul class="nav__links">
            <li><a class="nav__link" href="#missing-section">About</a></li>
          </ul>
        </header>
    "##,
    );
    let config = SiteConfig::default();
    let mounted = nav::mount(&page, &config.nav).unwrap().unwrap();

    click(&page, ".nav__toggle");
    let panel = page.query(".nav__links").unwrap();
    let toggle = page.query(".nav__toggle").unwrap();
    assert!(panel.class_list().contains("open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(mounted.menu().is_some_and(|menu| menu.is_open()));

    click(&page, ".nav__link");
    assert!(!panel.class_list().contains("open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn given_reduced_motion_when_typewriter_mounted_then_first_phrase_shown() {
    let page = fixture(r#"<span id="typewriter"></span>"#);
    let config = TypewriterConfig::default();

    let handle = typewriter::mount(&page, &config, scheduler(&page), Motion::Reduced).unwrap();

    assert!(handle.is_none());
    assert_eq!(
        page.by_id("typewriter").unwrap().text_content().as_deref(),
        Some("Engineer. Learner. Collaborator.")
    );
}

#[wasm_bindgen_test]
fn given_typewriter_when_started_then_first_character_is_immediate() {
    let page = fixture(r#"<span id="typewriter"></span>"#);
    let config = TypewriterConfig {
        phrases: vec!["Hi".to_string()],
        ..TypewriterConfig::default()
    };

    let handle = typewriter::mount(&page, &config, scheduler(&page), Motion::Full).unwrap();

    assert!(handle.is_some());
    assert_eq!(
        page.by_id("typewriter").unwrap().text_content().as_deref(),
        Some("H")
    );
}

#[wasm_bindgen_test]
fn given_orb_when_mounted_then_transform_applied() {
    let page = fixture(r#"<div class="orb" data-speed="0.2"></div>"#);
    let config = SiteConfig::default();

    let mounted = parallax::mount(&page, &config.parallax, Motion::Reduced).unwrap();

    assert!(mounted.is_some());
    let orb = page.query(".orb").unwrap().dyn_into::<HtmlElement>().unwrap();
    assert!(
        orb.style()
            .get_property_value("transform")
            .unwrap()
            .starts_with("translate3d(")
    );
}

#[wasm_bindgen_test]
fn given_year_element_when_mounted_then_year_written() {
    let page = fixture(r#"<span id="year">2000</span>"#);

    let year = footer::mount(&page).unwrap().unwrap();

    assert_eq!(year.len(), 4);
    assert_eq!(page.by_id("year").unwrap().text_content(), Some(year));
}

#[wasm_bindgen_test]
fn given_empty_page_when_components_mounted_then_all_skip() {
    let page = fixture("");
    let config = SiteConfig::default();

    assert!(nav::mount(&page, &config.nav).unwrap().is_none());
    assert!(footer::mount(&page).unwrap().is_none());
    assert!(parallax::mount(&page, &config.parallax, Motion::Full).unwrap().is_none());
}

const ANCHORS: &str = r##"
    <a class="nav__link" href="#target">Target</a>
    <a class="nav__link" href="#nowhere">Nowhere</a>
    <section id="target">target</section>
"##;

#[wasm_bindgen_test]
fn given_fragment_link_with_target_when_clicked_then_default_prevented() {
    let page = fixture(ANCHORS);

    let mounted = scroll::mount(&page, Motion::Reduced).unwrap().unwrap();

    assert_eq!(mounted.links, 2);
    assert!(click_prevented(&page, r##"a[href="#target"]"##));
}

#[wasm_bindgen_test]
fn given_fragment_link_without_target_when_clicked_then_browser_default_kept() {
    let page = fixture(ANCHORS);
    scroll::mount(&page, Motion::Full).unwrap().unwrap();

    assert!(!click_prevented(&page, r##"a[href="#nowhere"]"##));
}

#[wasm_bindgen_test]
fn given_page_without_fragment_links_when_scroll_mounted_then_skipped() {
    let page = fixture(r#"<a class="nav__link" href="/blog">Blog</a>"#);

    assert!(scroll::mount(&page, Motion::Full).unwrap().is_none());
}

#[wasm_bindgen_test]
async fn given_visible_skillbar_when_observed_then_bar_fills_and_readout_counts_up() {
    let page = fixture(
        r#"
        <div class="skillbar" data-level="70" style="height: 40px; width: 200px">
          <div class="skillbar__bar" style="height: 10px"></div>
          <span class="skillbar__value">0%</span>
        </div>
    "#,
    );
    let config = SiteConfig::default();

    let mounted = skills::mount(&page, &config.skills, scheduler(&page))
        .unwrap()
        .unwrap();
    gloo_timers::future::TimeoutFuture::new(200).await;

    assert!(mounted.has_revealed(0));
    assert_eq!(style_of(&page, ".skillbar__bar", "width"), "70%");

    gloo_timers::future::TimeoutFuture::new(1200).await;

    assert_eq!(
        page.query(".skillbar__value").unwrap().text_content().as_deref(),
        Some("70%")
    );
}

#[wasm_bindgen_test]
fn given_page_without_skillbars_when_mounted_then_skipped() {
    let page = fixture("");
    let config = SiteConfig::default();

    assert!(skills::mount(&page, &config.skills, scheduler(&page)).unwrap().is_none());
}
