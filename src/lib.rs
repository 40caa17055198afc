//! go-outline - JSON symbol outlines for Go source files
//!
//! This crate reads one Go file (from disk or from an overlay archive of
//! unsaved buffers), parses it with tree-sitter, and produces an outline
//! tree for editor symbol navigation.
//!
//! Pipeline: [`source::acquire`] → [`syntax::GoParser::parse`] →
//! [`outline::extract_outline`] → JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod outline;
pub mod source;
pub mod syntax;
pub mod tracing;

use std::io::BufRead;

// Re-export commonly used types
pub use config::{OutlineConfig, ParseMode, SourceMode};
pub use error::{OutlineError, Result};
pub use outline::{OutlineKind, OutlineNode, OutlineRange, Pos};

/// Build the outline for the configured file.
///
/// `overlay` supplies the archive in [`SourceMode::Overlay`] and is not
/// read otherwise. All-or-nothing: any error discards the whole outline.
pub fn outline_file<R: BufRead>(config: &OutlineConfig, overlay: R) -> Result<Vec<OutlineNode>> {
    let source = source::acquire(config, overlay)?;
    let file = syntax::GoParser::new()?.parse(source, config.parse_mode)?;
    outline::extract_outline(&file)
}

/// Build the outline and encode it as a single line of JSON
pub fn run<R: BufRead>(config: &OutlineConfig, overlay: R) -> Result<String> {
    let roots = outline_file(config, overlay)?;
    Ok(serde_json::to_string(&roots)?)
}
