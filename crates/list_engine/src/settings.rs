//! List engine settings
//!
//! Settings are plain serde data with defaults for every field, so a settings
//! file only needs to mention what it changes.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which indentation model wins when a level carries both
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentPrecedence {
    /// `margin_left` + `text_indent` (OpenOffice) first
    #[default]
    MarginFirst,
    /// `space_before` + `min_label_width` (Word) first
    SpaceBeforeFirst,
}

/// How a nested list's left indentation is expressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedIndent {
    /// Relative to the parent list (parent indentation is subtracted)
    #[default]
    Relative,
    /// Kept as the absolute value the style resolved to
    Absolute,
}

/// Settings shared by all list nodes of a document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// First number of a list whose style has no start value
    pub default_start_value: i32,
    /// Indentation model precedence
    pub indent_precedence: IndentPrecedence,
    /// Nested list indentation mode
    pub nested_indent: NestedIndent,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            default_start_value: 1,
            indent_precedence: IndentPrecedence::MarginFirst,
            nested_indent: NestedIndent::Relative,
        }
    }
}

impl ListSettings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, or return defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    "Failed to read list settings from {}, using defaults: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse list settings file, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
