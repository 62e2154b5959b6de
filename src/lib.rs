//! Terminal dashboard presenting a word of the day in different languages.
//!
//! The binary in `main.rs` wires these modules to a real terminal; the
//! library target exposes them so integration tests can drive the app
//! through scripted input and an in-memory backend.

pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod viewed;
pub mod vocabulary;
