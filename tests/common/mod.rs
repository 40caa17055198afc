//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use go_outline::{OutlineConfig, OutlineNode, SourceMode};
use tempfile::TempDir;

/// A Go file written into a fresh temporary directory
pub struct GoFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

/// Write `content` to `<tmp>/<name>` and return the handle
pub fn go_file(name: &str, content: &str) -> GoFile {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write go file");
    GoFile { dir, path }
}

/// Encode entries as an overlay archive stream
pub fn overlay_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut archive = Vec::new();
    for (name, content) in entries {
        archive.extend_from_slice(format!("{}\n{}\n", name, content.len()).as_bytes());
        archive.extend_from_slice(content.as_bytes());
    }
    archive
}

pub fn overlay_config(path: impl AsRef<Path>) -> OutlineConfig {
    OutlineConfig::new(path.as_ref()).with_source_mode(SourceMode::Overlay)
}

/// Outline a file from disk, panicking on failure
pub fn outline_disk(config: &OutlineConfig) -> OutlineNode {
    let mut roots = go_outline::outline_file(config, io::empty()).expect("outline");
    assert_eq!(roots.len(), 1);
    roots.remove(0)
}

/// Run the JSON pipeline against an overlay stream
pub fn run_overlay(config: &OutlineConfig, archive: Vec<u8>) -> go_outline::Result<String> {
    go_outline::run(config, Cursor::new(archive))
}

/// Source text a position range points at
pub fn slice<'a>(src: &'a str, range: &go_outline::OutlineRange) -> &'a str {
    &src[range.start.byte()..range.end.byte()]
}
