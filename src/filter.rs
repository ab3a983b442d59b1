//! Project filtering.

/// Filter tag that shows every card.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub category: String,
    /// Carries the `hidden` class.
    pub hidden: bool,
    /// Pointer is over the card.
    pub lifted: bool,
}

impl ProjectCard {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            hidden: false,
            lifted: false,
        }
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter == FILTER_ALL || self.category == filter
    }
}

/// Active filter plus the cards it governs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: String,
    pub cards: Vec<ProjectCard>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(FILTER_ALL, Vec::new())
    }
}

impl FilterState {
    /// `active` only marks the button; every card stays visible until the
    /// first selection.
    pub fn new(active: impl Into<String>, cards: Vec<ProjectCard>) -> Self {
        Self {
            active: active.into(),
            cards,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether the filter button tagged `tag` carries the active marker.
    pub fn is_active(&self, tag: &str) -> bool {
        self.active == tag
    }

    /// Make `tag` the single active filter and recompute every card.
    pub fn select(&mut self, tag: impl Into<String>) {
        self.active = tag.into();
        self.apply();
        tracing::debug!(
            filter = %self.active,
            shown = self.visible_count(),
            total = self.cards.len(),
            "projects filtered"
        );
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.hidden).count()
    }

    fn apply(&mut self) {
        let active = &self.active;
        for card in &mut self.cards {
            card.hidden = !card.matches(active);
        }
    }
}
