//! Adapter-level failures.
//!
//! Validation problems are not errors; see [`crate::form::FieldError`].

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Invalid UI config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
