//! Error types for the outline pipeline
//!
//! Every error is terminal for a run. Causes are chained through
//! `#[source]` so the binary can print the whole chain on one line.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::SourceError;

/// A 1-based line/column location inside the outlined file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error(transparent)]
    Acquisition(#[from] SourceError),

    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("could not parse file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to render receiver type @ {location}: {message}")]
    Render { location: Location, message: String },

    #[error("unknown declaration `{kind}` @ {location}")]
    UnknownDeclaration { kind: String, location: Location },

    #[error("unknown spec `{kind}` in {block} declaration @ {location}")]
    UnknownSpec {
        block: &'static str,
        kind: String,
        location: Location,
    },

    #[error("failed to encode outline")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OutlineError>;
