//! Paragraph content blocks

use crate::Chunk;
use doc_model::Font;
use serde::{Deserialize, Serialize};

/// A paragraph-like block: an ordered sequence of chunks and the block's own font
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Chunks in reading order
    pub chunks: Vec<Chunk>,
    /// Font declared on the paragraph itself
    pub font: Font,
}

impl Paragraph {
    /// Create an empty paragraph in the standard font
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph with a declared font
    pub fn with_font(font: Font) -> Self {
        Self {
            chunks: Vec::new(),
            font,
        }
    }

    /// Paragraph holding one text chunk in the paragraph font
    pub fn from_text(text: impl Into<String>, font: Font) -> Self {
        Self {
            chunks: vec![Chunk::text(text, font.clone())],
            font,
        }
    }

    /// Append a chunk
    pub fn push(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    /// Builder form of [`Paragraph::push`]
    pub fn with_chunk(mut self, chunk: Chunk) -> Self {
        self.push(chunk);
        self
    }

    /// Concatenated text of all text chunks
    pub fn text(&self) -> String {
        self.chunks.iter().filter_map(Chunk::as_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_skips_images() {
        let para = Paragraph::new()
            .with_chunk(Chunk::text("Hello ", Font::standard()))
            .with_chunk(Chunk::image(doc_model::ImageResource::new("x", 1.0, 1.0)))
            .with_chunk(Chunk::text("world", Font::family("Courier")));
        assert_eq!(para.text(), "Hello world");
        assert_eq!(para.chunks.len(), 3);
    }

    #[test]
    fn test_from_text_uses_paragraph_font() {
        let para = Paragraph::from_text("Item", Font::family("Arial"));
        assert_eq!(para.chunks[0].font, para.font);
    }
}
