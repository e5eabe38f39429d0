#![forbid(unsafe_code)]

//! Command-line driver for picklist.
//!
//! Loads a JSON array of `{ "text": ... }` records, renders them with a
//! [`picklist_widgets::ListView`] inside a [`picklist_runtime::Program`],
//! replays a script of clicks and reloads, and prints the resulting markup.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod script;

pub use cli::{Cli, execute};
pub use error::{DemoError, Result};
