//! List level properties as written by document producers
//!
//! A list style carries one property record per nesting level. Records are
//! sparse: a producer may define levels 0 and 2 only and leave level 1 to be
//! inherited. The records mirror what the producers actually write, which
//! means two different ways of expressing indentation:
//! - OpenOffice style: `margin_left` plus a (usually negative) `text_indent`
//! - Word style: `space_before` plus `min_label_width`

use crate::{DocModelError, ImageResource, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

// =============================================================================
// Number Format
// =============================================================================

/// Numbering format descriptor of a list level
///
/// With neither flag set the level is numbered with arabic digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumFormat {
    /// Letters: A, B, ... Z, AA, AB, ...
    pub alphabetical: bool,
    /// Roman numerals: I, II, III, IV, ...
    pub roman: bool,
    /// Render letters and numerals in lowercase
    pub lowercase: bool,
}

impl NumFormat {
    /// Arabic digits: 1, 2, 3, ...
    pub fn arabic() -> Self {
        Self::default()
    }

    /// Letters in the given case
    pub fn alphabetical(lowercase: bool) -> Self {
        Self {
            alphabetical: true,
            lowercase,
            ..Default::default()
        }
    }

    /// Roman numerals in the given case
    pub fn roman(lowercase: bool) -> Self {
        Self {
            roman: true,
            lowercase,
            ..Default::default()
        }
    }
}

impl FromStr for NumFormat {
    type Err = DocModelError;

    /// Parse a producer format token ("1", "a", "A", "i", "I")
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Self::arabic()),
            "a" => Ok(Self::alphabetical(true)),
            "A" => Ok(Self::alphabetical(false)),
            "i" => Ok(Self::roman(true)),
            "I" => Ok(Self::roman(false)),
            other => Err(DocModelError::UnsupportedNumFormat(other.to_string())),
        }
    }
}

// =============================================================================
// List Level Properties
// =============================================================================

/// Properties of one list level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLevelProperties {
    /// Bullet character (bullet levels)
    pub bullet_char: Option<String>,
    /// Marker image (image levels)
    pub image: Option<ImageResource>,
    /// Absolute width override for the marker image, in points
    pub width: Option<f32>,
    /// Absolute height override for the marker image, in points
    pub height: Option<f32>,
    /// Number format (number levels)
    pub num_format: Option<NumFormat>,
    /// First number of the level
    pub start_value: Option<i32>,
    /// Text rendered before the number
    pub num_prefix: Option<String>,
    /// Text rendered after the number
    pub num_suffix: Option<String>,
    /// Left margin of the item body, in points (OpenOffice)
    pub margin_left: Option<f32>,
    /// First line indent relative to the margin, in points (OpenOffice)
    pub text_indent: Option<f32>,
    /// Space before the label, in points (Word)
    pub space_before: Option<f32>,
    /// Width reserved for the label, in points (Word)
    pub min_label_width: Option<f32>,
    /// Label is drawn with the font of the owning style
    #[serde(default)]
    pub label_style_specified: bool,
}

impl ListLevelProperties {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Bullet level with the given character
    pub fn bullet(bullet: impl Into<String>) -> Self {
        Self {
            bullet_char: Some(bullet.into()),
            ..Default::default()
        }
    }

    /// Image level with the given marker
    pub fn image(image: ImageResource) -> Self {
        Self {
            image: Some(image),
            ..Default::default()
        }
    }

    /// Number level with the given format
    pub fn numbered(format: NumFormat) -> Self {
        Self {
            num_format: Some(format),
            ..Default::default()
        }
    }

    /// Set the absolute marker image size overrides
    pub fn with_image_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the first number
    pub fn with_start_value(mut self, start: i32) -> Self {
        self.start_value = Some(start);
        self
    }

    /// Set the number prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.num_prefix = Some(prefix.into());
        self
    }

    /// Set the number suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.num_suffix = Some(suffix.into());
        self
    }

    /// Set OpenOffice style indentation
    pub fn with_margin(mut self, margin_left: f32, text_indent: f32) -> Self {
        self.margin_left = Some(margin_left);
        self.text_indent = Some(text_indent);
        self
    }

    /// Set Word style indentation
    pub fn with_label_space(mut self, space_before: f32, min_label_width: f32) -> Self {
        self.space_before = Some(space_before);
        self.min_label_width = Some(min_label_width);
        self
    }

    /// Draw the label with the owning style's font
    pub fn with_label_style(mut self) -> Self {
        self.label_style_specified = true;
        self
    }
}

// =============================================================================
// List Properties Map
// =============================================================================

/// Per-level list properties of a style, keyed by zero-based level
pub type ListPropertiesMap = BTreeMap<u32, ListLevelProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_num_format_tokens() {
        assert_eq!("1".parse::<NumFormat>().unwrap(), NumFormat::arabic());
        assert_eq!("a".parse::<NumFormat>().unwrap(), NumFormat::alphabetical(true));
        assert_eq!("A".parse::<NumFormat>().unwrap(), NumFormat::alphabetical(false));
        assert_eq!("i".parse::<NumFormat>().unwrap(), NumFormat::roman(true));
        assert_eq!("I".parse::<NumFormat>().unwrap(), NumFormat::roman(false));
    }

    #[test]
    fn test_parse_unknown_num_format() {
        let err = "\u{0661}".parse::<NumFormat>().unwrap_err();
        assert!(matches!(err, DocModelError::UnsupportedNumFormat(_)));
        assert!("".parse::<NumFormat>().is_err());
    }

    #[test]
    fn test_builders() {
        let props = ListLevelProperties::numbered(NumFormat::arabic())
            .with_start_value(5)
            .with_prefix("(")
            .with_suffix(")")
            .with_margin(10.0, -4.0);

        assert_eq!(props.start_value, Some(5));
        assert_eq!(props.num_prefix.as_deref(), Some("("));
        assert_eq!(props.num_suffix.as_deref(), Some(")"));
        assert_eq!(props.margin_left, Some(10.0));
        assert_eq!(props.text_indent, Some(-4.0));
        assert!(props.space_before.is_none());
        assert!(!props.label_style_specified);
    }

    #[test]
    fn test_properties_deserialize_with_missing_fields() {
        let props: ListLevelProperties =
            serde_json::from_str(r#"{"bullet_char": "•", "margin_left": 18.0}"#).unwrap();
        assert_eq!(props.bullet_char.as_deref(), Some("\u{2022}"));
        assert_eq!(props.margin_left, Some(18.0));
        assert!(!props.label_style_specified);
    }
}
