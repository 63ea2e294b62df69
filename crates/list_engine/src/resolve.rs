//! Resolution of a style into the configuration of one list level
//!
//! Resolution is a pure function of (level, style, settings). The result is
//! an immutable value that a [`ListNode`](crate::ListNode) merges in one step,
//! so a failed resolution never leaves a node half updated.

use crate::cascade::resolve_level;
use crate::indent::{resolve_indentation, Indentation};
use crate::label::NumericStyle;
use crate::settings::IndentPrecedence;
use crate::{ListError, Result};
use doc_model::{Font, ImageResource, ListLevelProperties, Style};

/// What is drawn in front of each item of a list
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LabelKind {
    /// No style applied yet
    #[default]
    None,
    /// A bullet character
    Bullet { text: String, font: Font },
    /// A marker image, already scaled
    Image(ImageResource),
    /// Generated numbering; without a numbering system only the affixes are shown
    Numeric {
        prefix: String,
        suffix: String,
        style: Option<NumericStyle>,
        font: Font,
    },
}

impl LabelKind {
    /// Font the style assigned to the label, if it is not the standard font
    pub fn font(&self) -> Option<&Font> {
        match self {
            LabelKind::Bullet { font, .. } | LabelKind::Numeric { font, .. } => {
                Some(font).filter(|f| !f.is_standard())
            }
            LabelKind::None | LabelKind::Image(_) => None,
        }
    }

    /// Check if labels are generated from the item index
    pub fn is_numeric(&self) -> bool {
        matches!(self, LabelKind::Numeric { .. })
    }
}

/// Configuration of one list level resolved from a style
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedListStyle {
    /// Level the resolution was requested for
    pub requested_level: u32,
    /// Level whose record was used
    pub source_level: u32,
    /// Label of the level
    pub label: LabelKind,
    /// First number, if the record sets one
    pub start_value: Option<i32>,
    /// Indentation, if the record describes one completely
    pub indentation: Option<Indentation>,
}

impl ResolvedListStyle {
    /// Resolve the list configuration of `level` from `style`
    ///
    /// Returns `Ok(None)` when the style has no list properties for `level`
    /// or any lower level.
    pub fn resolve(level: u32, style: &Style, precedence: IndentPrecedence) -> Result<Option<Self>> {
        let Some(map) = style.list_properties.as_ref() else {
            return Ok(None);
        };
        let Some(cascaded) = resolve_level(level, map) else {
            return Ok(None);
        };

        let props = cascaded.properties;
        let label = resolve_label(props, style, cascaded.level)?;
        let start_value = if label.is_numeric() {
            props.start_value
        } else {
            None
        };

        Ok(Some(Self {
            requested_level: level,
            source_level: cascaded.level,
            label,
            start_value,
            indentation: resolve_indentation(props, precedence),
        }))
    }
}

/// Pick the label: bullet character, then image, then numbering
fn resolve_label(props: &ListLevelProperties, style: &Style, level: u32) -> Result<LabelKind> {
    if let Some(bullet) = &props.bullet_char {
        return Ok(LabelKind::Bullet {
            text: bullet.clone(),
            font: label_font(props, style),
        });
    }

    if let Some(image) = &props.image {
        let mut image = image.clone();
        if let Some(width) = props.width {
            image.scale_absolute_width(width);
        }
        if let Some(height) = props.height {
            image.scale_absolute_height(height);
        }
        return Ok(LabelKind::Image(image));
    }

    let numeric_style = props
        .num_format
        .as_ref()
        .map(|format| {
            NumericStyle::from_format(format).ok_or_else(|| {
                tracing::warn!("list level {} asks for letters and roman numerals at once", level);
                ListError::UnsupportedStyle {
                    level,
                    reason: "number format is both alphabetical and roman".to_string(),
                }
            })
        })
        .transpose()?;

    Ok(LabelKind::Numeric {
        prefix: props.num_prefix.clone().unwrap_or_default(),
        suffix: props.num_suffix.clone().unwrap_or_default(),
        style: numeric_style,
        font: label_font(props, style),
    })
}

/// The style's font when the record asks for it, otherwise the standard font
fn label_font(props: &ListLevelProperties, style: &Style) -> Font {
    if props.label_style_specified {
        style.font().cloned().unwrap_or_default()
    } else {
        Font::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{NumFormat, TextProperties};

    fn resolve(level: u32, style: &Style) -> Option<ResolvedListStyle> {
        ResolvedListStyle::resolve(level, style, IndentPrecedence::MarginFirst).unwrap()
    }

    #[test]
    fn test_style_without_list_properties() {
        assert!(resolve(0, &Style::new("Plain")).is_none());
    }

    #[test]
    fn test_bullet_beats_image_and_number() {
        let mut props = ListLevelProperties::bullet("\u{2022}");
        props.image = Some(ImageResource::new("dot.png", 8.0, 8.0));
        props.num_format = Some(NumFormat::roman(false));
        props.start_value = Some(4);
        let style = Style::new("L").with_level(0, props);

        let resolved = resolve(0, &style).unwrap();
        assert!(matches!(resolved.label, LabelKind::Bullet { ref text, .. } if text == "\u{2022}"));
        assert_eq!(resolved.start_value, None);
    }

    #[test]
    fn test_image_beats_number_and_is_scaled() {
        let mut props = ListLevelProperties::image(ImageResource::new("dot.png", 8.0, 8.0))
            .with_image_size(Some(5.0), None);
        props.num_format = Some(NumFormat::arabic());
        let style = Style::new("L").with_level(0, props);

        let LabelKind::Image(image) = resolve(0, &style).unwrap().label else {
            panic!("expected an image label");
        };
        assert_eq!(image.scaled_width, 5.0);
        assert_eq!(image.scaled_height, 8.0);
    }

    #[test]
    fn test_number_is_the_fallback() {
        let style = Style::new("L").with_level(0, ListLevelProperties::numbered(NumFormat::arabic()).with_suffix("."));
        let resolved = resolve(0, &style).unwrap();
        assert_eq!(
            resolved.label,
            LabelKind::Numeric {
                prefix: String::new(),
                suffix: ".".to_string(),
                style: Some(NumericStyle::Arabic),
                font: Font::standard(),
            }
        );
    }

    #[test]
    fn test_missing_format_keeps_only_affixes() {
        let style = Style::new("L").with_level(
            0,
            ListLevelProperties::new().with_suffix(")").with_start_value(4),
        );
        let resolved = resolve(0, &style).unwrap();
        assert_eq!(
            resolved.label,
            LabelKind::Numeric {
                prefix: String::new(),
                suffix: ")".to_string(),
                style: None,
                font: Font::standard(),
            }
        );
        assert_eq!(resolved.start_value, Some(4));
    }

    #[test]
    fn test_label_font_only_when_requested() {
        let text = TextProperties::with_font(Font::family("OpenSymbol"));

        let style = Style::new("L")
            .with_level(0, ListLevelProperties::bullet("\u{25CF}"))
            .with_text_properties(text.clone());
        assert_eq!(resolve(0, &style).unwrap().label.font(), None);

        let style = Style::new("L")
            .with_level(0, ListLevelProperties::bullet("\u{25CF}").with_label_style())
            .with_text_properties(text);
        assert_eq!(
            resolve(0, &style).unwrap().label.font().and_then(|f| f.family.as_deref()),
            Some("OpenSymbol")
        );
    }

    #[test]
    fn test_cascaded_level_is_reported() {
        let style = Style::new("L").with_level(1, ListLevelProperties::numbered(NumFormat::alphabetical(true)));
        assert!(resolve(0, &style).is_none());

        let resolved = resolve(4, &style).unwrap();
        assert_eq!(resolved.requested_level, 4);
        assert_eq!(resolved.source_level, 1);
    }

    #[test]
    fn test_contradictory_format_is_rejected() {
        let format = NumFormat {
            alphabetical: true,
            roman: true,
            lowercase: true,
        };
        let style = Style::new("L").with_level(2, ListLevelProperties::numbered(format));

        let err = ResolvedListStyle::resolve(3, &style, IndentPrecedence::MarginFirst).unwrap_err();
        assert!(matches!(err, ListError::UnsupportedStyle { level: 2, .. }));
    }
}
