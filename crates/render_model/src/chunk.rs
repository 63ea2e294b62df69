//! Styled chunks - the smallest unit of rendered inline content

use doc_model::{Font, ImageResource};
use serde::{Deserialize, Serialize};

/// What a chunk draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChunkContent {
    /// Text drawn with the chunk's font
    Text(String),
    /// Inline image, offset from the baseline position
    Image {
        image: ImageResource,
        offset_x: f32,
        offset_y: f32,
    },
}

/// A run of inline content with one font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: ChunkContent,
    pub font: Font,
}

impl Chunk {
    /// Text chunk in the given font
    pub fn text(text: impl Into<String>, font: Font) -> Self {
        Self {
            content: ChunkContent::Text(text.into()),
            font,
        }
    }

    /// Empty text chunk; keeps a font without drawing anything
    pub fn empty(font: Font) -> Self {
        Self::text(String::new(), font)
    }

    /// Image chunk drawn at the baseline
    pub fn image(image: ImageResource) -> Self {
        Self {
            content: ChunkContent::Image {
                image,
                offset_x: 0.0,
                offset_y: 0.0,
            },
            font: Font::standard(),
        }
    }

    /// Text of the chunk, `None` for image chunks
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            ChunkContent::Text(text) => Some(text),
            ChunkContent::Image { .. } => None,
        }
    }

    /// Check if the chunk draws nothing
    pub fn is_empty(&self) -> bool {
        matches!(&self.content, ChunkContent::Text(text) if text.is_empty())
    }
}
