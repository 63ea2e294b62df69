//! List Engine - List style resolution and label rendering
//!
//! This crate turns a list style (per-level list properties) and a stream of
//! paragraphs into configured list nodes ready for the page renderer:
//! - Level cascade: a level without properties inherits the nearest lower level
//! - Indentation: OpenOffice and Word indentation models mapped to one model
//! - Labels: bullets, image markers and arabic/alphabetic/roman numbering
//! - Nesting: sub-lists are indented relative to their parent list

mod error;
pub mod label;
pub mod indent;
pub mod cascade;
mod resolve;
mod node;
mod assembler;
pub mod settings;

pub use error::*;
pub use label::NumericStyle;
pub use indent::{IndentDialect, Indentation};
pub use cascade::CascadedLevel;
pub use resolve::*;
pub use node::*;
pub use assembler::*;
pub use settings::{IndentPrecedence, ListSettings, NestedIndent};
