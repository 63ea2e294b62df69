//! Style records - the style object a list is rendered with
//!
//! A style bundles the per-level list properties with the paragraph-level
//! text properties. Only the parts the list engine reads are modelled here.

use crate::{Font, ListLevelProperties, ListPropertiesMap};
use serde::{Deserialize, Serialize};

// =============================================================================
// Style Identifier
// =============================================================================

/// Unique identifier for a style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StyleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Text Properties
// =============================================================================

/// Text formatting properties of a style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextProperties {
    /// Font of the style's text
    pub font: Option<Font>,
}

impl TextProperties {
    pub fn with_font(font: Font) -> Self {
        Self { font: Some(font) }
    }
}

// =============================================================================
// Style Definition
// =============================================================================

/// A style as applied to a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Unique identifier for this style
    pub id: StyleId,
    /// Per-level list properties (list styles only)
    #[serde(default)]
    pub list_properties: Option<ListPropertiesMap>,
    /// Text properties
    #[serde(default)]
    pub text_properties: Option<TextProperties>,
}

impl Style {
    /// Create a style without properties
    pub fn new(id: impl Into<StyleId>) -> Self {
        Self {
            id: id.into(),
            list_properties: None,
            text_properties: None,
        }
    }

    /// Set the properties of one list level
    pub fn with_level(mut self, level: u32, props: ListLevelProperties) -> Self {
        self.list_properties
            .get_or_insert_with(ListPropertiesMap::new)
            .insert(level, props);
        self
    }

    /// Set the text properties
    pub fn with_text_properties(mut self, props: TextProperties) -> Self {
        self.text_properties = Some(props);
        self
    }

    /// Font of the style's text properties, if any
    pub fn font(&self) -> Option<&Font> {
        self.text_properties.as_ref()?.font.as_ref()
    }
}
