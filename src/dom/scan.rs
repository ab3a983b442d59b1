//! One-time scan of the document into element handles and a [`PageModel`].

use crate::filter::FILTER_ALL;
use crate::form::Field;
use crate::state::PageModel;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement};

/// A form input and its error display.
pub struct FieldElements {
    pub field: Field,
    pub input: HtmlElement,
    pub error: Option<Element>,
}

/// Handles to everything the controller touches. Anything missing from the
/// page is `None` or an empty list, and its feature is skipped.
pub struct Elements {
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,
    pub header: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_close: Option<Element>,
    /// Nav links with the section id their fragment points at.
    pub nav_links: Vec<(Element, Option<String>)>,
    /// In-page anchors that are not nav links.
    pub anchors: Vec<Element>,
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,
    pub filter_buttons: Vec<(Element, String)>,
    pub cards: Vec<HtmlElement>,
    /// Every `section`, observed for reveal.
    pub sections: Vec<Element>,
    /// `section[id]`, measured for active-link tracking.
    pub id_sections: Vec<HtmlElement>,
    pub skill_bars: Vec<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub form: Option<HtmlFormElement>,
    pub fields: Vec<FieldElements>,
    pub submit: Option<HtmlButtonElement>,
    /// Submit label from the markup, restored after a send.
    pub submit_label: String,
}

pub fn scan(document: &Document) -> (Elements, PageModel) {
    let nav_links: Vec<(Element, Option<String>)> = select_all(document, ".nav__link")
        .into_iter()
        .map(|link| {
            let target = link
                .get_attribute("href")
                .and_then(|href| crate::nav::fragment_id(&href).map(str::to_string));
            (link, target)
        })
        .collect();

    let anchors = select_all(document, r##"a[href^="#"]"##)
        .into_iter()
        .filter(|a| !a.class_list().contains("nav__link"))
        .collect();

    let filter_buttons: Vec<(Element, String)> = select_all(document, ".filter-btn")
        .into_iter()
        .map(|btn| {
            let tag = btn
                .get_attribute("data-filter")
                .unwrap_or_else(|| FILTER_ALL.to_string());
            (btn, tag)
        })
        .collect();
    let initial_filter = filter_buttons
        .iter()
        .find(|(btn, _)| btn.class_list().contains("active"))
        .map(|(_, tag)| tag.clone())
        .unwrap_or_else(|| FILTER_ALL.to_string());

    let cards: Vec<HtmlElement> = select_all_html(document, ".project-card");
    let card_categories = cards
        .iter()
        .map(|card| card.get_attribute("data-category").unwrap_or_default())
        .collect();

    let skill_bars: Vec<HtmlElement> = select_all_html(document, ".skill__progress");
    let skill_targets = skill_bars
        .iter()
        .map(|bar| {
            bar.get_attribute("data-width")
                .and_then(|w| w.trim().parse::<f64>().ok())
                .unwrap_or(0.0)
        })
        .collect();

    let sections = select_all(document, "section");
    let section_ids = sections.iter().map(|s| s.id()).collect();

    let hero = select_one(document, ".hero").and_then(|e| e.dyn_into::<HtmlElement>().ok());

    let form = document
        .get_element_by_id("contact-form")
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok());
    let submit = form.as_ref().and_then(|f| {
        f.query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
    });
    let submit_label = submit
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();

    let fields: Vec<FieldElements> = Field::ALL
        .into_iter()
        .filter_map(|field| {
            let input = document
                .get_element_by_id(field.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(FieldElements {
                field,
                input,
                error: document.get_element_by_id(field.error_id()),
            })
        })
        .collect();

    let theme_toggle = document.get_element_by_id("theme-toggle");
    let theme_icon = theme_toggle
        .as_ref()
        .and_then(|t| t.query_selector(".theme-toggle__icon").ok().flatten());

    let page = PageModel {
        section_ids,
        initial_filter,
        card_categories,
        skill_targets,
        has_hero: hero.is_some(),
        form_fields: fields.iter().map(|fe| fe.field).collect(),
    };

    let elements = Elements {
        root: document.document_element(),
        body: document.body(),
        header: document.get_element_by_id("header"),
        nav_menu: document.get_element_by_id("nav-menu"),
        nav_toggle: document.get_element_by_id("nav-toggle"),
        nav_close: document.get_element_by_id("nav-close"),
        nav_links,
        anchors,
        theme_toggle,
        theme_icon,
        filter_buttons,
        cards,
        sections,
        id_sections: select_all_html(document, "section[id]"),
        skill_bars,
        hero,
        form,
        fields,
        submit,
        submit_label,
    };

    tracing::debug!(
        sections = elements.sections.len(),
        cards = elements.cards.len(),
        fields = elements.fields.len(),
        "page scanned"
    );

    (elements, page)
}

fn select_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::warn!(selector, "invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    select_all(document, selector)
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect()
}
