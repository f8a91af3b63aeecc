//! Element contract with the page markup

pub const HEADER: &str = "#site-nav";
pub const NAV_TOGGLE: &str = ".nav__toggle";
pub const NAV_LINKS: &str = ".nav__links";
pub const NAV_LINK: &str = ".nav__link";
pub const SECTIONS: &str = "section[id]";
pub const HERO: &str = "#home";

pub const TYPEWRITER_ID: &str = "typewriter";
pub const ORB: &str = ".orb";

pub const SKILLBAR: &str = ".skillbar";
pub const SKILLBAR_BAR: &str = ".skillbar__bar";
pub const SKILLBAR_VALUE: &str = ".skillbar__value";

pub const SLIDER: &str = ".slider";
pub const SLIDE_TRACK: &str = ".slides";
pub const SLIDE: &str = ".slide";
pub const SLIDER_PREV: &str = ".slider__btn--prev";
pub const SLIDER_NEXT: &str = ".slider__btn--next";
pub const SLIDER_DOTS: &str = ".slider__dots";

pub const YEAR_ID: &str = "year";
pub const CONFIG_ID: &str = "folio-config";

/// Class names written by the behaviors
pub mod class {
    pub const OPEN: &str = "open";
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const SLIDER_DOT: &str = "slider__dot";
}

/// Data attributes read by the behaviors
pub mod attr {
    pub const SPEED: &str = "data-speed";
    pub const LEVEL: &str = "data-level";
}
