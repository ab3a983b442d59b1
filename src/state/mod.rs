//! Controller State Module
//!
//! Explicit runtime state for the page, the events that drive it and the
//! side effects it asks the browser adapter to perform.

pub mod app_state;
pub mod page;

pub use app_state::*;
pub use page::*;
