#![forbid(unsafe_code)]

//! Core: events, display records, callbacks and the HTML render target.
//!
//! # Role in picklist
//! `picklist-core` is the layer every other crate builds on. It owns the
//! identity-tracked [`items::Items`] sequence, the canonical [`event::Event`]
//! type the runtime consumes, and the [`frame::Frame`] that components render
//! into.
//!
//! # Primary responsibilities
//! - **Items**: an immutable, shared sequence of [`items::DisplayRecord`]s whose
//!   identity is the allocation, not the contents.
//! - **Event**: host input normalized to hit-targeted clicks.
//! - **Frame**: an HTML buffer plus the registry of deferred activation
//!   handlers, keyed by hit id.
//! - **Callback / Trigger**: shared message producers that are only invoked
//!   when an event fires.

pub mod callback;
pub mod event;
pub mod frame;
pub mod html;
pub mod items;

pub use callback::{Callback, Trigger};
pub use event::{ClickEvent, Event, HitData, HitId, MouseButton, ParseHitError};
pub use frame::Frame;
pub use items::{DisplayRecord, Items};
