//! Footer copyright year

use folio_core::year::current_year_text;

use crate::components::skipped;
use crate::dom::Page;
use crate::error::Result;
use crate::selectors;

/// Write the current year into `#year`. Returns the text written.
#[allow(clippy::unnecessary_wraps)]
pub fn mount(page: &Page) -> Result<Option<String>> {
    let Some(target) = page.by_id(selectors::YEAR_ID) else {
        return skipped("footer", "no year element");
    };
    let year = current_year_text();
    target.set_text_content(Some(&year));
    Ok(Some(year))
}
