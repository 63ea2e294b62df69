//! Render Model - Primitives handed to the page renderer
//!
//! These are the building blocks the layout pipeline paints: styled text
//! chunks, paragraphs made of chunks, and list items with a label chunk.
//! The list engine produces them; it never paints them itself.

mod chunk;
mod paragraph;
mod list_item;

pub use chunk::*;
pub use paragraph::*;
pub use list_item::*;
