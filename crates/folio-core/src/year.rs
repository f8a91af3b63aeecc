//! Footer copyright year

use chrono::{Datelike, Local};

/// Year text for any date.
#[must_use]
pub fn year_text<D: Datelike>(date: &D) -> String {
    date.year().to_string()
}

/// Year text for the visitor's current local date.
#[must_use]
pub fn current_year_text() -> String {
    year_text(&Local::now())
}
