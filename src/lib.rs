//! Portfolio UI - page interactivity for a single-page portfolio site
//!
//! The controller is plain Rust state ([`UiState`]) driven by [`AppEvent`]s.
//! In the browser, `dom` scans the page, forwards DOM events and renders the
//! state back onto the document.

pub mod config;
pub mod effects;
pub mod error;
pub mod filter;
pub mod form;
pub mod nav;
pub mod reveal;
pub mod state;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use config::UiConfig;
pub use error::UiError;
pub use state::{AppCommand, AppEvent, PageModel, Timer, UiState};
pub use theme::Theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = dom::boot() {
        tracing::error!(error = %err, "portfolio UI failed to start");
    }
}
