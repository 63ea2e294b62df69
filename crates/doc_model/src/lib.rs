//! Document Model - Style records consumed by list rendering
//!
//! This crate provides the document-side types the list engine reads:
//! per-level list properties, paragraph-level text properties, fonts and
//! image references. It performs no layout of its own.

mod node_id;
mod error;
mod font;
mod image;
pub mod list;
pub mod style;

pub use node_id::*;
pub use error::*;
pub use font::*;
pub use image::*;
pub use list::*;
pub use style::*;
