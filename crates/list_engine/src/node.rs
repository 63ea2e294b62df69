//! List nodes - one list at one nesting level

use crate::assembler::ListEntry;
use crate::settings::ListSettings;
use crate::{LabelKind, ListError, ResolvedListStyle, Result};
use doc_model::{NodeId, Style};

/// A list at one nesting level
///
/// A node is configured by [`ListNode::apply_style`] and then filled with
/// [`ListNode::append_content`]. Nested lists are owned by their parent
/// node; a node only knows its parent's id.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) level: u32,
    pub(crate) settings: ListSettings,
    pub(crate) label: LabelKind,
    pub(crate) start_value: i32,
    /// Leaf items appended so far; nested lists are not counted
    pub(crate) item_count: usize,
    pub(crate) left_indent: f32,
    pub(crate) label_indent: f32,
    pub(crate) last_applied_style: Option<Style>,
    pub(crate) resolved: Option<ResolvedListStyle>,
    pub(crate) entries: Vec<ListEntry>,
}

impl ListNode {
    /// Create a list at `level` with default settings
    pub fn new(parent: Option<NodeId>, level: i32) -> Result<Self> {
        Self::with_settings(parent, level, ListSettings::default())
    }

    /// Create a list at `level`
    ///
    /// Fails with [`ListError::InvalidLevel`] for a negative level.
    pub fn with_settings(parent: Option<NodeId>, level: i32, settings: ListSettings) -> Result<Self> {
        let level = u32::try_from(level).map_err(|_| ListError::InvalidLevel(level))?;
        Ok(Self {
            id: NodeId::new(),
            parent,
            level,
            settings,
            label: LabelKind::None,
            start_value: settings.default_start_value,
            item_count: 0,
            left_indent: 0.0,
            label_indent: 0.0,
            last_applied_style: None,
            resolved: None,
            entries: Vec::new(),
        })
    }

    /// Configure the list from a style
    ///
    /// The label and indentation are re-derived from the style's record for
    /// this level (or the nearest lower level). A style without a usable
    /// record leaves the configuration as it was. The start value and the
    /// indentation are only replaced when the record defines them.
    pub fn apply_style(&mut self, style: &Style) -> Result<()> {
        let resolved = ResolvedListStyle::resolve(self.level, style, self.settings.indent_precedence)?;
        self.last_applied_style = Some(style.clone());

        match resolved {
            Some(resolved) => {
                tracing::debug!(
                    "list level {} styled by {} from level {}: {:?}",
                    self.level,
                    style.id,
                    resolved.source_level,
                    resolved.label
                );
                self.merge(resolved);
            }
            None => {
                tracing::debug!(
                    "style {} has no list properties up to level {}, keeping configuration",
                    style.id,
                    self.level
                );
            }
        }
        Ok(())
    }

    fn merge(&mut self, resolved: ResolvedListStyle) {
        self.label = resolved.label.clone();
        if let Some(start) = resolved.start_value {
            self.start_value = start;
        }
        if let Some(indent) = resolved.indentation {
            self.left_indent = indent.left;
            self.label_indent = indent.label;
        }
        self.resolved = Some(resolved);
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Container owning this list
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    pub fn label_kind(&self) -> &LabelKind {
        &self.label
    }

    pub fn start_value(&self) -> i32 {
        self.start_value
    }

    /// Restart numbering at `start` for the items appended from now on
    pub fn set_start_value(&mut self, start: i32) {
        self.start_value = start;
    }

    /// Number of leaf items appended so far
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index the next labeled item will be numbered with
    pub fn next_index(&self) -> i64 {
        i64::from(self.start_value) + self.item_count as i64
    }

    /// Left indentation of the list, in points
    pub fn left_indent(&self) -> f32 {
        self.left_indent
    }

    /// Space reserved for labels, in points
    pub fn label_indent(&self) -> f32 {
        self.label_indent
    }

    /// The style most recently applied with [`ListNode::apply_style`]
    pub fn last_applied_style(&self) -> Option<&Style> {
        self.last_applied_style.as_ref()
    }

    /// The configuration most recently resolved from a style
    pub fn resolved_style(&self) -> Option<&ResolvedListStyle> {
        self.resolved.as_ref()
    }

    /// Items and nested lists in document order
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }
}
