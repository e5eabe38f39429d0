//! Demo configuration loaded from TOML or JSON.
//!
//! ```toml
//! # picklist.toml
//! [palette]
//! selected = "green"
//! unselected = "red"
//!
//! [list]
//! text_align = "left"
//! widget_id = 1
//! ```
//!
//! Every field has a default, so an empty file is a valid config.

use std::path::{Path, PathBuf};

use picklist_core::HitId;
use picklist_widgets::{ListView, Palette, TextAlign};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("invalid config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Row background colors.
    pub palette: Palette,
    /// List presentation.
    pub list: ListConfig,
}

/// List presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Alignment of row text.
    pub text_align: TextAlign,
    /// Hit id the rows register under; also written to `data-widget`.
    pub widget_id: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            text_align: TextAlign::Left,
            widget_id: 1,
        }
    }
}

impl DemoConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a file, picking the format from its extension, and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate all values.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.palette.selected.trim().is_empty() {
            errors.push("palette.selected must not be empty".to_string());
        }
        if self.palette.unselected.trim().is_empty() {
            errors.push("palette.unselected must not be empty".to_string());
        }
        if self
            .palette
            .selected
            .trim()
            .eq_ignore_ascii_case(self.palette.unselected.trim())
        {
            errors.push(format!(
                "palette.selected and palette.unselected are both '{}'; selection would be invisible",
                self.palette.selected.trim()
            ));
        }
        errors
    }

    /// Apply the presentation settings to a list.
    #[must_use]
    pub fn apply(&self, list: ListView) -> ListView {
        list.widget_id(HitId::new(self.list.widget_id))
            .palette(self.palette.clone())
            .text_align(self.list.text_align)
    }
}
