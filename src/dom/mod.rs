//! Browser adapter
//!
//! Binds DOM events to [`AppEvent`]s and carries out [`AppCommand`]s.
//!
//! ```text
//! DOM event ──Closure──► dispatch() ──► UiState::handle_event ──► render()
//!                                                 │
//!                                                 ▼
//!                                       execute(AppCommand) ──► window / storage / timers
//! ```
//!
//! The controller lives in a thread-local. Commands run after the borrow is
//! released, since focusing or scrolling can synchronously fire more events.

mod render;
mod scan;

use crate::form::Field;
use crate::nav::{fragment_id, ScrollMetrics, SectionBounds};
use crate::{AppCommand, AppEvent, Theme, Timer, UiConfig, UiError, UiState};
use scan::Elements;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

/// Element holding an optional JSON override of [`UiConfig`].
const CONFIG_ELEMENT_ID: &str = "ui-config";

struct Controller {
    window: Window,
    document: Document,
    elements: Elements,
    state: UiState,
    /// State as of the last render.
    rendered: Option<UiState>,
}

impl Controller {
    fn render(&mut self) {
        if let Err(err) = render::render(&self.elements, &self.state, self.rendered.as_ref()) {
            tracing::warn!(error = %UiError::from(err), "render failed");
        }
        self.rendered = Some(self.state.clone());
    }
}

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = const { RefCell::new(None) };
}

/// Entry point: initialize now, or once the document has been parsed.
pub fn boot() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;

    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| {
            if let Err(err) = init() {
                tracing::error!(error = %err, "portfolio UI failed to initialize");
            }
        })?;
        return Ok(());
    }
    init()
}

fn init() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;

    let config = load_config(&document);
    let theme = initial_theme(&window, &config);
    let (elements, page) = scan::scan(&document);

    for section in &elements.sections {
        section.class_list().add_1("fade-in")?;
    }

    let state = UiState::new(config, page, theme);
    tracing::info!(theme = %theme, "portfolio UI initialized");

    let mut controller = Controller {
        window: window.clone(),
        document: document.clone(),
        elements,
        state,
        rendered: None,
    };
    controller.render();
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));

    install_listeners(&window, &document)?;
    install_reveal_observer()?;

    // active link for wherever the page was opened
    dispatch_with(|c| Some(AppEvent::Scrolled(scroll_metrics(c))));

    if document.ready_state() == "complete" {
        dispatch(AppEvent::PageLoaded);
    } else {
        listen(&window, "load", |_| dispatch(AppEvent::PageLoaded))?;
    }
    Ok(())
}

fn load_config(document: &Document) -> UiConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|e| e.text_content())
    else {
        return UiConfig::default();
    };
    UiConfig::from_json(&json).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring UI config override");
        UiConfig::default()
    })
}

fn initial_theme(window: &Window, config: &UiConfig) -> Theme {
    let persisted = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(&config.theme_storage_key).ok().flatten());
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    Theme::resolve(persisted.as_deref(), prefers_dark)
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run one event through the controller, render, then execute its commands.
fn dispatch(event: AppEvent) {
    dispatch_with(move |_| Some(event));
}

/// Like [`dispatch`], building the event while the controller is borrowed
/// (for events that need element handles or measurements).
fn dispatch_with(build: impl FnOnce(&Controller) -> Option<AppEvent>) {
    let commands = CONTROLLER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return Vec::new();
        };
        let Some(event) = build(controller) else {
            return Vec::new();
        };
        let commands = controller.state.handle_event(event);
        controller.render();
        commands
    });

    for command in commands {
        if let Err(err) = execute(command) {
            tracing::warn!(error = %err, "command failed");
        }
    }
}

fn with_controller<R>(f: impl FnOnce(&Controller) -> R) -> Option<R> {
    CONTROLLER.with(|cell| cell.borrow().as_ref().map(f))
}

fn execute(command: AppCommand) -> Result<(), UiError> {
    tracing::debug!(?command, "executing");
    let Some(window) = with_controller(|c| c.window.clone()) else {
        return Ok(());
    };

    match command {
        AppCommand::ScrollTo { top } => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        AppCommand::PersistTheme(theme) => {
            let key = with_controller(|c| c.state.config.theme_storage_key.clone())
                .unwrap_or_default();
            match window.local_storage()? {
                Some(storage) => storage.set_item(&key, theme.as_str())?,
                None => tracing::warn!("no local storage; theme not persisted"),
            }
        }
        AppCommand::Schedule { timer, delay_ms } => schedule(&window, timer, delay_ms)?,
        AppCommand::FocusField(field) => {
            if let Some(input) = field_input(field) {
                input.focus()?;
            }
        }
        AppCommand::CenterField(field) => {
            if let Some(input) = field_input(field) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                input.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        AppCommand::ShowNotice(text) => window.alert_with_message(&text)?,
        AppCommand::ResetForm => {
            if let Some(form) = with_controller(|c| c.elements.form.clone()).flatten() {
                form.reset();
            }
        }
    }
    Ok(())
}

fn schedule(window: &Window, timer: Timer, delay_ms: u32) -> Result<(), UiError> {
    let callback = Closure::once_into_js(move || dispatch(AppEvent::TimerFired(timer)));
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    Ok(())
}

fn field_input(field: Field) -> Option<web_sys::HtmlElement> {
    with_controller(|c| {
        c.elements
            .fields
            .iter()
            .find(|fe| fe.field == field)
            .map(|fe| fe.input.clone())
    })
    .flatten()
}

fn field_value(input: &Element) -> String {
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = input.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn scroll_metrics(c: &Controller) -> ScrollMetrics {
    let sections = c
        .elements
        .id_sections
        .iter()
        .map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
        .collect();
    ScrollMetrics {
        scroll_y: c.window.scroll_y().unwrap_or(0.0),
        viewport_height: c
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
        sections,
    }
}

/// offsetTop of the section an in-page link points at.
fn link_target_top(document: &Document, link: &Element) -> Option<f64> {
    let href = link.get_attribute("href")?;
    let target = document.get_element_by_id(fragment_id(&href)?)?;
    let target = target.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(target.offset_top() as f64)
}

// =============================================================================
// LISTENERS
// =============================================================================

/// Attach a handler for the lifetime of the page.
fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), UiError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    // page-lifetime listener
    callback.forget();
    Ok(())
}

fn install_listeners(window: &Window, document: &Document) -> Result<(), UiError> {
    let Some(handles) = with_controller(|c| ListenerTargets::from(&c.elements)) else {
        return Ok(());
    };

    if let Some(toggle) = &handles.nav_toggle {
        listen(toggle, "click", |_| dispatch(AppEvent::MenuOpened))?;
    }
    if let Some(close) = &handles.nav_close {
        listen(close, "click", |_| dispatch(AppEvent::MenuClosed))?;
    }

    for link in handles.nav_links {
        let target = link.clone();
        listen(&link, "click", move |event| {
            event.prevent_default();
            dispatch_with(|c| {
                Some(AppEvent::NavLinkClicked {
                    target_top: link_target_top(&c.document, &target),
                })
            });
        })?;
    }

    for anchor in handles.anchors {
        let target = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            dispatch_with(|c| {
                Some(AppEvent::AnchorClicked {
                    target_top: link_target_top(&c.document, &target),
                })
            });
        })?;
    }

    listen(window, "scroll", |_| {
        dispatch_with(|c| Some(AppEvent::Scrolled(scroll_metrics(c))))
    })?;

    listen(document, "keydown", |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) {
            dispatch(AppEvent::KeyPressed(key));
        }
    })?;

    if let Some(toggle) = &handles.theme_toggle {
        listen(toggle, "click", |_| dispatch(AppEvent::ThemeToggled))?;
    }

    for (button, tag) in handles.filter_buttons {
        listen(&button, "click", move |_| {
            dispatch(AppEvent::FilterSelected(tag.clone()))
        })?;
    }

    for (index, card) in handles.cards.into_iter().enumerate() {
        listen(&card, "mouseenter", move |_| {
            dispatch(AppEvent::CardHovered {
                index,
                hovered: true,
            })
        })?;
        listen(&card, "mouseleave", move |_| {
            dispatch(AppEvent::CardHovered {
                index,
                hovered: false,
            })
        })?;
    }

    for (field, input) in handles.fields {
        let source = input.clone();
        listen(&input, "blur", move |_| {
            dispatch(AppEvent::FieldBlurred {
                field,
                value: field_value(&source),
            })
        })?;
        let source = input.clone();
        listen(&input, "input", move |_| {
            dispatch(AppEvent::FieldInput {
                field,
                value: field_value(&source),
            })
        })?;
    }

    if let Some(form) = &handles.form {
        listen(form, "submit", |event| {
            event.prevent_default();
            dispatch_with(|c| {
                let values = c
                    .elements
                    .fields
                    .iter()
                    .map(|fe| (fe.field, field_value(&fe.input)))
                    .collect();
                Some(AppEvent::FormSubmitted { values })
            });
        })?;
    }

    tracing::debug!("listeners installed");
    Ok(())
}

/// Cloned handles, so listeners are attached without holding the controller.
struct ListenerTargets {
    nav_toggle: Option<Element>,
    nav_close: Option<Element>,
    nav_links: Vec<Element>,
    anchors: Vec<Element>,
    theme_toggle: Option<Element>,
    filter_buttons: Vec<(Element, String)>,
    cards: Vec<Element>,
    fields: Vec<(Field, Element)>,
    form: Option<Element>,
}

impl From<&Elements> for ListenerTargets {
    fn from(el: &Elements) -> Self {
        Self {
            nav_toggle: el.nav_toggle.clone(),
            nav_close: el.nav_close.clone(),
            nav_links: el.nav_links.iter().map(|(l, _)| l.clone()).collect(),
            anchors: el.anchors.clone(),
            theme_toggle: el.theme_toggle.clone(),
            filter_buttons: el.filter_buttons.clone(),
            cards: el.cards.iter().map(|c| Element::clone(c)).collect(),
            fields: el
                .fields
                .iter()
                .map(|fe| (fe.field, Element::clone(&fe.input)))
                .collect(),
            form: el.form.as_ref().map(|f| Element::clone(f)),
        }
    }
}

fn install_reveal_observer() -> Result<(), UiError> {
    let Some((sections, threshold, margin)) = with_controller(|c| {
        (
            c.elements.sections.clone(),
            c.state.config.reveal_threshold,
            c.state.config.reveal_root_margin(),
        )
    }) else {
        return Ok(());
    };
    if sections.is_empty() {
        return Ok(());
    }

    let observed = sections.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(index) = observed.iter().position(|s| *s == target) {
                    dispatch(AppEvent::SectionIntersected(index));
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(&margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}
