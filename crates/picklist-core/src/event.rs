#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host UI runtime owns the real DOM. When the user clicks a rendered row
//! the host reads the row's `data-hit` attribute and hands it back as an
//! [`Event::Click`]. Everything downstream works with these normalized values
//! and never sees host-specific event objects.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier for a clickable surface.
///
/// Components that register hit targets use their widget id here; the
/// per-target [`HitData`] distinguishes rows within the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque per-target data. Lists store the row position here.
pub type HitData = u64;

/// Format a hit target the way it appears in a `data-hit` attribute.
#[must_use]
pub fn format_hit(id: HitId, data: HitData) -> String {
    format!("{id}:{data}")
}

/// Error returned when a `data-hit` attribute value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHitError {
    #[error("hit target '{0}' is missing the ':' separator")]
    MissingSeparator(String),
    #[error("hit target '{value}' has an invalid {part} component")]
    InvalidNumber { value: String, part: &'static str },
}

/// Parse a `"{id}:{data}"` hit target.
pub fn parse_hit(value: &str) -> Result<(HitId, HitData), ParseHitError> {
    let (id, data) = value
        .trim()
        .split_once(':')
        .ok_or_else(|| ParseHitError::MissingSeparator(value.to_string()))?;
    let id = id.parse::<u32>().map_err(|_| ParseHitError::InvalidNumber {
        value: value.to_string(),
        part: "id",
    })?;
    let data = data
        .parse::<HitData>()
        .map_err(|_| ParseHitError::InvalidNumber {
            value: value.to_string(),
            part: "data",
        })?;
    Ok((HitId(id), data))
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left (primary) mouse button.
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// A completed click on a registered hit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    /// Which button was clicked.
    pub button: MouseButton,
    /// Widget the click landed on.
    pub id: HitId,
    /// Target data registered by the widget (row position for lists).
    pub data: HitData,
}

impl ClickEvent {
    /// Create a primary-button click on the given target.
    #[must_use]
    pub const fn new(id: HitId, data: HitData) -> Self {
        Self {
            button: MouseButton::Left,
            id,
            data,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Whether this click counts as a user activation.
    ///
    /// Only the primary button activates; secondary buttons are left to the
    /// host (context menus and the like).
    #[inline]
    #[must_use]
    pub const fn is_activation(&self) -> bool {
        matches!(self.button, MouseButton::Left)
    }
}

impl FromStr for ClickEvent {
    type Err = ParseHitError;

    /// Parse a primary-button click from a `data-hit` attribute value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, data) = parse_hit(s)?;
        Ok(Self::new(id, data))
    }
}

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// A click on a rendered hit target.
    Click(ClickEvent),
}

impl Event {
    /// Shorthand for a primary-button click.
    #[must_use]
    pub const fn click(id: HitId, data: HitData) -> Self {
        Self::Click(ClickEvent::new(id, data))
    }
}

impl From<ClickEvent> for Event {
    fn from(click: ClickEvent) -> Self {
        Self::Click(click)
    }
}
