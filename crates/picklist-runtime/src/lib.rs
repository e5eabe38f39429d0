#![forbid(unsafe_code)]

//! Runtime: the update/view loop that drives picklist models.
//!
//! A [`Program`] owns one [`Model`], the queue of pending messages and the
//! most recent [`Frame`](picklist_core::Frame). Host events are resolved
//! against that frame, turned into messages, and processed one at a time to
//! completion before the model is rendered again.

pub mod program;

pub use program::{Cmd, EventOutcome, Model, Program};
