//! Navigation menu, active-section highlighting, and sticky header state

/// Extract the fragment identifier from an in-page link (`"#about"` → `"about"`).
///
/// Returns `None` for non-fragment links and for a bare `"#"`.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Open/closed state of the mobile link panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Start from the panel's current state.
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the panel and return the new state.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// One visibility notification for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry<'a> {
    pub id: &'a str,
    pub is_intersecting: bool,
}

/// Maps visible sections onto the nav link that should be marked active.
#[derive(Debug, Clone, Default)]
pub struct SectionHighlighter {
    fragments: Vec<Option<String>>,
    active: Option<usize>,
}

impl SectionHighlighter {
    /// Build from the links' `href` values in document order.
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let fragments = hrefs
            .into_iter()
            .map(|href| href.and_then(|href| fragment_of(href.as_ref()).map(str::to_string)))
            .collect();

        Self {
            fragments,
            active: None,
        }
    }

    /// First link pointing at `section_id`.
    #[must_use]
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.fragments
            .iter()
            .position(|fragment| fragment.as_deref() == Some(section_id))
    }

    /// Process one batch of notifications in the order they were delivered.
    ///
    /// Every intersecting entry with a matching link resets the highlight to
    /// that link, so the last one processed wins. Returns the link activated
    /// by this batch, or `None` when the batch changed nothing.
    pub fn observe(&mut self, entries: &[SectionEntry<'_>]) -> Option<usize> {
        let winner = entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter_map(|entry| self.link_for(entry.id))
            .last();

        if let Some(link) = winner {
            self.active = Some(link);
        }
        winner
    }

    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, link: usize) -> bool {
        self.active == Some(link)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Header appearance relative to the hero landmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Hero on screen: header sits transparently on top of it
    #[default]
    Transparent,
    /// Hero scrolled away: header gets a solid background
    Solid,
}

impl HeaderMode {
    #[must_use]
    pub const fn from_hero_visibility(hero_intersecting: bool) -> Self {
        if hero_intersecting { Self::Transparent } else { Self::Solid }
    }

    /// Whether the header should carry the `scrolled` class.
    #[must_use]
    pub const fn is_scrolled(self) -> bool {
        matches!(self, Self::Solid)
    }
}
