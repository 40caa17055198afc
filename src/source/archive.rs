//! Overlay archive decoding
//!
//! Editors pass unsaved buffers as a stream of entries:
//!
//! ```text
//! <file name>\n
//! <decimal size>\n
//! <exactly size bytes of content>
//! ```
//!
//! File names are cleaned lexically so lookups do not depend on how the
//! caller spelled the path.

use std::collections::HashMap;
use std::io::{self, BufRead, Read};
use std::num::ParseIntError;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("reading archive file name")]
    ReadName(#[source] io::Error),

    #[error("reading size of archive file {name}")]
    ReadSize {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("reading size of archive file {name}: unexpected end of archive")]
    MissingSize { name: String },

    #[error("parsing size of archive file {name}")]
    BadSize {
        name: String,
        #[source]
        source: ParseIntError,
    },

    #[error("reading archive file {name}")]
    ReadContent {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Decoded overlay: cleaned path → replacement content
#[derive(Debug, Default, Clone)]
pub struct OverlayArchive {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl OverlayArchive {
    /// Decode an archive from a buffered reader, consuming it to the end
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, ArchiveError> {
        let mut files = HashMap::new();

        loop {
            let Some(name) = read_line(&mut reader).map_err(ArchiveError::ReadName)? else {
                break;
            };
            let name = name.trim().to_string();

            let size_line = read_line(&mut reader)
                .map_err(|source| ArchiveError::ReadSize {
                    name: name.clone(),
                    source,
                })?
                .ok_or_else(|| ArchiveError::MissingSize { name: name.clone() })?;
            let size: u32 = size_line
                .trim()
                .parse()
                .map_err(|source| ArchiveError::BadSize {
                    name: name.clone(),
                    source,
                })?;

            // Grows with the bytes actually present, not the announced size
            let mut content = Vec::new();
            let read = reader
                .by_ref()
                .take(u64::from(size))
                .read_to_end(&mut content)
                .map_err(|source| ArchiveError::ReadContent {
                    name: name.clone(),
                    source,
                })?;
            if read < size as usize {
                return Err(ArchiveError::ReadContent {
                    name,
                    source: io::ErrorKind::UnexpectedEof.into(),
                });
            }

            tracing::trace!(file = %name, size, "overlay entry");
            files.insert(clean_path(Path::new(&name)), content);
        }

        Ok(Self { files })
    }

    /// Content recorded for `path`, if any
    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(&clean_path(path)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Read one newline-terminated line. A final line without its newline
/// counts as end of stream.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    if buf.last() != Some(&b'\n') {
        return Ok(None);
    }
    buf.pop();
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Lexically normalize a path: drop `.`, fold `..` into its parent and
/// collapse repeated separators.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
