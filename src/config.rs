//! Run configuration
//!
//! Built once from the command line and borrowed immutably by the
//! acquisition and parsing steps.

use std::path::PathBuf;

/// How much of the file the parser should consider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Every top-level declaration
    #[default]
    Full,
    /// Only the package clause and the leading import declarations
    ImportsOnly,
}

/// Where the file content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Read the file from disk
    #[default]
    Disk,
    /// Look the file up in an overlay archive read from standard input
    Overlay,
}

/// Immutable settings for one outline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Path of the file to outline (also the overlay archive key)
    pub file: PathBuf,
    pub parse_mode: ParseMode,
    pub source_mode: SourceMode,
    /// Directory for the rolling debug log, if file logging is wanted
    pub log_dir: Option<PathBuf>,
}

impl OutlineConfig {
    /// Config for outlining `file` from disk with every declaration
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            parse_mode: ParseMode::default(),
            source_mode: SourceMode::default(),
            log_dir: None,
        }
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    pub fn with_source_mode(mut self, source_mode: SourceMode) -> Self {
        self.source_mode = source_mode;
        self
    }
}
