//! Static page structure, scanned once at startup.

use crate::filter::FILTER_ALL;
use crate::form::Field;

/// What the document offers the controller. Optional pieces of the page
/// that are absent simply leave their list empty or flag false.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    /// Observed sections in document order; empty string for id-less sections.
    pub section_ids: Vec<String>,
    /// Tag of the button marked active in the markup.
    pub initial_filter: String,
    /// Category tag of every project card, in document order.
    pub card_categories: Vec<String>,
    /// `data-width` of every skill bar, in percent.
    pub skill_targets: Vec<f64>,
    pub has_hero: bool,
    /// Contact form inputs found on the page.
    pub form_fields: Vec<Field>,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            section_ids: Vec::new(),
            initial_filter: FILTER_ALL.to_string(),
            card_categories: Vec::new(),
            skill_targets: Vec::new(),
            has_hero: false,
            form_fields: Field::ALL.to_vec(),
        }
    }
}
