//! Projects [`UiState`] onto the document.
//!
//! Each piece is written only when it differs from the last rendered state.
//! One-way markers (`visible`, `loaded`) are only ever added.

use super::scan::Elements;
use crate::effects::{card_transform, hero_transform};
use crate::theme::THEME_ATTRIBUTE;
use crate::UiState;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

pub fn render(el: &Elements, state: &UiState, last: Option<&UiState>) -> Result<(), JsValue> {
    // navigation
    if last.map_or(true, |prev| prev.nav != state.nav) {
        toggle(el.header.as_ref(), "scrolled", state.nav.header_scrolled)?;
        toggle(el.nav_menu.as_ref(), "show", state.nav.menu_open)?;
        toggle(el.nav_toggle.as_ref(), "active", state.nav.menu_open)?;
        if let (Some(overflow), Some(body)) = (state.body_overflow_change(last), &el.body) {
            body.style().set_property("overflow", overflow)?;
        }
        // until some section matches, the markup's own active link stands
        if state.nav.active_link.is_some() {
            for (link, target) in &el.nav_links {
                let active = target.as_deref().is_some_and(|id| state.nav.is_active(id));
                link.class_list().toggle_with_force("active", active)?;
            }
        }
    }

    // theme
    if last.map_or(true, |prev| prev.theme != state.theme) {
        if let Some(root) = &el.root {
            root.set_attribute(THEME_ATTRIBUTE, state.theme.as_str())?;
        }
        if let Some(icon) = &el.theme_icon {
            icon.set_text_content(Some(state.theme.icon()));
        }
    }

    // projects
    if last.map_or(true, |prev| prev.filter != state.filter) {
        for (btn, tag) in &el.filter_buttons {
            btn.class_list()
                .toggle_with_force("active", state.filter.is_active(tag))?;
        }
        for (i, (node, card)) in el.cards.iter().zip(&state.filter.cards).enumerate() {
            node.class_list().toggle_with_force("hidden", card.hidden)?;
            let hover_changed = last
                .and_then(|prev| prev.filter.cards.get(i))
                .is_some_and(|prev| prev.lifted != card.lifted);
            if hover_changed {
                let transform = card_transform(card.lifted, state.config.card_lift);
                node.style().set_property("transform", &transform)?;
            }
        }
    }

    // reveal
    for (i, (node, section)) in el.sections.iter().zip(&state.reveal.sections).enumerate() {
        let was_revealed = last
            .and_then(|prev| prev.reveal.sections.get(i))
            .is_some_and(|prev| prev.revealed);
        if section.revealed && !was_revealed {
            node.class_list().add_1("visible")?;
        }
    }
    let fill_changed = last.map_or(true, |prev| !prev.reveal.skills_filled);
    if state.reveal.skills_filled && fill_changed {
        for (node, bar) in el.skill_bars.iter().zip(&state.reveal.skill_bars) {
            node.style().set_property("width", &bar.width_css())?;
        }
    }

    // effects
    let prev_fx = last.map(|prev| &prev.effects);
    if state.effects.page_loaded && !prev_fx.is_some_and(|fx| fx.page_loaded) {
        add(el.body.as_deref(), "loaded")?;
    }
    if let Some(hero) = &el.hero {
        if state.effects.hero_visible && !prev_fx.is_some_and(|fx| fx.hero_visible) {
            hero.class_list().add_1("visible")?;
        }
        if let Some(offset) = state.effects.hero_offset {
            if prev_fx.map_or(true, |fx| fx.hero_offset != Some(offset)) {
                hero.style().set_property("transform", &hero_transform(offset))?;
            }
        }
    }

    // contact form; untouched fields keep the markup's styling on first render
    if let Some(prev) = last {
        for fe in &el.fields {
            let status = &state.form.field(fe.field).status;
            if &prev.form.field(fe.field).status == status {
                continue;
            }
            render_field_status(&fe.input, fe.error.as_ref(), status)?;
        }
        if prev.form.submit != state.form.submit {
            if let Some(btn) = &el.submit {
                let pending = state.submit_disabled();
                btn.set_disabled(pending);
                let label = if pending {
                    state.config.pending_label.as_str()
                } else {
                    el.submit_label.as_str()
                };
                btn.set_text_content(Some(label));
            }
        }
    }

    Ok(())
}

fn render_field_status(
    input: &HtmlElement,
    error: Option<&Element>,
    status: &crate::form::FieldStatus,
) -> Result<(), JsValue> {
    let Some(error) = error else {
        return Ok(());
    };
    let message = status.message();
    error.set_text_content(Some(&message));
    error
        .class_list()
        .toggle_with_force("show", status.is_invalid())?;
    input
        .style()
        .set_property("border-color", status.border_color())
}

fn toggle(el: Option<&Element>, class: &str, on: bool) -> Result<(), JsValue> {
    if let Some(el) = el {
        el.class_list().toggle_with_force(class, on)?;
    }
    Ok(())
}

fn add(el: Option<&Element>, class: &str) -> Result<(), JsValue> {
    if let Some(el) = el {
        el.class_list().add_1(class)?;
    }
    Ok(())
}
