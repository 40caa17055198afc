//! Source acquisition
//!
//! Produces the text to outline, either from disk or from an overlay
//! archive of unsaved editor buffers.

mod archive;

pub use archive::{clean_path, ArchiveError, OverlayArchive};

use std::io::{self, BufRead};
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{OutlineConfig, SourceMode};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse -modified archive")]
    Decode(#[from] ArchiveError),

    #[error("couldn't find {} in archive", .path.display())]
    Lookup { path: PathBuf },

    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Text of the file being outlined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub path: PathBuf,
    pub text: String,
}

/// Acquire the configured file's text.
///
/// `overlay` is only read in [`SourceMode::Overlay`].
pub fn acquire<R: BufRead>(
    config: &OutlineConfig,
    overlay: R,
) -> Result<SourceText, SourceError> {
    let path = config.file.clone();

    let bytes = match config.source_mode {
        SourceMode::Disk => std::fs::read(&path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?,
        SourceMode::Overlay => {
            let archive = OverlayArchive::parse(overlay)?;
            tracing::debug!(entries = archive.len(), "decoded overlay archive");
            archive
                .get(&path)
                .ok_or_else(|| SourceError::Lookup { path: path.clone() })?
                .to_vec()
        }
    };

    tracing::debug!(
        path = %path.display(),
        mode = ?config.source_mode,
        bytes = bytes.len(),
        "acquired source"
    );

    let text =
        String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 { path: path.clone() })?;
    Ok(SourceText { path, text })
}
