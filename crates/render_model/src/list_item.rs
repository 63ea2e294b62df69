//! Rendered list items

use crate::{Chunk, Paragraph};
use serde::{Deserialize, Serialize};

/// A list item ready for the renderer: a label chunk followed by content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Label drawn in front of the content (may be empty)
    pub label: Chunk,
    /// The item body
    pub content: Paragraph,
    /// Space reserved for the label, in points
    pub indentation_left: f32,
    /// Right indentation, in points
    pub indentation_right: f32,
}

impl ListItem {
    pub fn new(label: Chunk, content: Paragraph) -> Self {
        Self {
            label,
            content,
            indentation_left: 0.0,
            indentation_right: 0.0,
        }
    }

    /// Set the label and right indentation
    pub fn with_indentation(mut self, left: f32, right: f32) -> Self {
        self.indentation_left = left;
        self.indentation_right = right;
        self
    }

    /// Label text, `None` for image labels
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_text()
    }
}
