//! Indentation of list levels
//!
//! Producers describe list indentation in two incompatible ways. OpenOffice
//! writes the body margin and a negative text indent, i.e. the label hangs
//! left of the body text. Word writes the space before the label and the
//! width reserved for it. Both are mapped to a left indentation of the list
//! and an indentation reserved for the label.

use crate::settings::IndentPrecedence;
use doc_model::ListLevelProperties;
use serde::{Deserialize, Serialize};

/// Resolved indentation of a list level, in points, never negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indentation {
    /// Left indentation of the list
    pub left: f32,
    /// Space reserved for the label
    pub label: f32,
}

/// Indentation model a level record is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentDialect {
    /// `margin_left` + `text_indent`
    MarginTextIndent,
    /// `space_before` + `min_label_width`
    LabelWidth,
}

impl IndentDialect {
    /// Indentation described by this dialect, if the record carries both of its fields
    pub fn resolve(self, props: &ListLevelProperties) -> Option<Indentation> {
        match self {
            IndentDialect::MarginTextIndent => {
                let (margin_left, text_indent) = (props.margin_left?, props.text_indent?);
                Some(Indentation {
                    left: (margin_left + text_indent).max(0.0),
                    label: (-text_indent).max(0.0),
                })
            }
            IndentDialect::LabelWidth => {
                let (space_before, min_label_width) = (props.space_before?, props.min_label_width?);
                Some(Indentation {
                    left: (space_before - min_label_width).max(0.0),
                    label: min_label_width.max(0.0),
                })
            }
        }
    }

    fn ordered(precedence: IndentPrecedence) -> [IndentDialect; 2] {
        match precedence {
            IndentPrecedence::MarginFirst => [IndentDialect::MarginTextIndent, IndentDialect::LabelWidth],
            IndentPrecedence::SpaceBeforeFirst => {
                [IndentDialect::LabelWidth, IndentDialect::MarginTextIndent]
            }
        }
    }
}

/// Dialects fully present in a record, in precedence order
pub fn detect_dialects(props: &ListLevelProperties, precedence: IndentPrecedence) -> Vec<IndentDialect> {
    IndentDialect::ordered(precedence)
        .into_iter()
        .filter(|dialect| dialect.resolve(props).is_some())
        .collect()
}

/// Resolve the indentation of a level record
///
/// Returns `None` when neither dialect is fully present; the caller keeps
/// whatever indentation it had.
pub fn resolve_indentation(
    props: &ListLevelProperties,
    precedence: IndentPrecedence,
) -> Option<Indentation> {
    let dialects = detect_dialects(props, precedence);
    if dialects.len() > 1 {
        tracing::debug!(
            "list level carries both indentation models, using {:?}",
            dialects[0]
        );
    }
    dialects.first().and_then(|dialect| dialect.resolve(props))
}
