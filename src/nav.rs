//! Navigation menu, header scroll state and active-link tracking.

use serde::{Deserialize, Serialize};

/// Measured position of a page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open scroll range in which this section's link is active.
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Scroll position plus the layout measured alongside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Sections in document order.
    pub sections: Vec<SectionBounds>,
}

/// Menu, header and active-link state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    /// Overlay menu shown; page scroll is locked while true.
    pub menu_open: bool,
    pub header_scrolled: bool,
    /// Section id whose nav link carries the active marker.
    pub active_link: Option<String>,
}

impl NavState {
    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Escape closes an open menu. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.menu_open {
            self.close_menu();
            return true;
        }
        false
    }

    /// Recompute header state and active link from a scroll sample.
    pub fn update_scroll(
        &mut self,
        metrics: &ScrollMetrics,
        scrolled_threshold: f64,
        link_offset: f64,
    ) {
        self.header_scrolled = metrics.scroll_y > scrolled_threshold;
        if let Some(id) = active_section(metrics.scroll_y, &metrics.sections, link_offset) {
            if self.active_link.as_deref() != Some(id) {
                tracing::debug!(section = id, "active nav link changed");
                self.active_link = Some(id.to_string());
            }
        }
    }

    /// Whether the link pointing at `section_id` is the active one.
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_link.as_deref() == Some(section_id)
    }
}

/// The section whose range contains `scroll_y`. Later sections win on overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y, offset))
        .map(|s| s.id.as_str())
}

/// Section id from an in-page link, `"#about"` -> `"about"`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top just below the fixed header.
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
    section_top - header_offset
}
