//! Go syntax layer
//!
//! Wraps tree-sitter-go:
//! - Parsing with syntax error rejection
//! - Import-only restriction of the declaration list
//! - Rendering type expressions back to source text

mod parser;
mod render;

pub use parser::{GoParser, ParsedFile};
pub use render::{render_type, RenderError};
