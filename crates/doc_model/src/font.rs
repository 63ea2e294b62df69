//! Font descriptions attached to styles, paragraphs and text chunks

use serde::{Deserialize, Serialize};

/// A font request as carried by styles and styled text.
///
/// Every attribute is optional. A font with no attribute set is the
/// renderer's standard font, i.e. "whatever the renderer uses by default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family name
    pub family: Option<String>,
    /// Font size in points
    pub size: Option<f32>,
    /// Bold formatting
    pub bold: Option<bool>,
    /// Italic formatting
    pub italic: Option<bool>,
    /// Text color (CSS color string)
    pub color: Option<String>,
}

impl Font {
    /// The renderer's standard font
    pub fn standard() -> Self {
        Self::default()
    }

    /// Create a font for a family
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Default::default()
        }
    }

    /// Set the size in points
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Check if this is the renderer's standard font (no attribute set)
    pub fn is_standard(&self) -> bool {
        self.family.is_none()
            && self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.color.is_none()
    }
}
