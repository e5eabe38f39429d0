#![forbid(unsafe_code)]

//! Row palette and list alignment.

/// Background colors for the two row states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct Palette {
    /// Background of the selected row.
    pub selected: String,
    /// Background of every other row.
    pub unselected: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selected: "green".to_string(),
            unselected: "red".to_string(),
        }
    }
}

impl Palette {
    /// Create a palette from two CSS colors.
    #[must_use]
    pub fn new(selected: impl Into<String>, unselected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            unselected: unselected.into(),
        }
    }

    /// Background color for a row.
    #[inline]
    #[must_use]
    pub fn background(&self, is_selected: bool) -> &str {
        if is_selected {
            &self.selected
        } else {
            &self.unselected
        }
    }
}

/// Horizontal alignment of row text inside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}
