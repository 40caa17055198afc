//! Outlining unsaved buffers supplied as an overlay archive

mod common;

use std::io::Cursor;

use common::{go_file, overlay_archive, overlay_config, run_overlay};
use go_outline::source::SourceError;
use go_outline::{OutlineError, OutlineKind, ParseMode};
use serde_json::Value;

const ON_DISK: &str = "package disk\n\nfunc OnDisk() {}\n";
const IN_BUFFER: &str = "package buffer\n\nfunc Edited() {}\n\nvar dirty = true\n";

#[test]
fn test_outlines_archive_content_not_disk_content() {
    let file = go_file("b.go", ON_DISK);
    let path = file.path.to_string_lossy().into_owned();
    let archive = overlay_archive(&[(path.as_str(), IN_BUFFER)]);

    let json = run_overlay(&overlay_config(&file.path), archive).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["label"], "buffer");
    let labels: Vec<&str> = value[0]["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Edited", "dirty"]);
}

#[test]
fn test_file_need_not_exist_on_disk() {
    let archive = overlay_archive(&[("/a/b.go", IN_BUFFER)]);
    let mut roots = go_outline::outline_file(&overlay_config("/a/b.go"), Cursor::new(archive)).unwrap();
    let root = roots.remove(0);
    assert_eq!(root.label, "buffer");
    assert_eq!(root.children[1].kind, OutlineKind::Variable);
}

#[test]
fn test_picks_the_requested_entry() {
    let archive = overlay_archive(&[
        ("/a/other.go", "package other\n"),
        ("/a/b.go", IN_BUFFER),
    ]);
    let json = run_overlay(&overlay_config("/a/b.go"), archive).unwrap();
    assert!(json.contains("\"label\":\"buffer\""));
    assert!(!json.contains("other"));
}

#[test]
fn test_path_absent_from_archive_is_lookup_error() {
    let archive = overlay_archive(&[("/a/other.go", "package other\n")]);
    let err = run_overlay(&overlay_config("/a/b.go"), archive).unwrap_err();

    assert!(matches!(
        err,
        OutlineError::Acquisition(SourceError::Lookup { .. })
    ));
    assert_eq!(err.to_string(), "couldn't find /a/b.go in archive");
}

#[test]
fn test_undecodable_archive_is_decode_error() {
    let err = run_overlay(&overlay_config("/a/b.go"), b"/a/b.go\n99\npackage b".to_vec())
        .unwrap_err();
    assert!(matches!(
        err,
        OutlineError::Acquisition(SourceError::Decode(_))
    ));
    assert_eq!(err.to_string(), "failed to parse -modified archive");
}

#[test]
fn test_imports_only_on_buffer() {
    let buffer = "package m\n\nimport \"fmt\"\n\nfunc Half(";
    let archive = overlay_archive(&[("/m.go", buffer)]);
    let config = overlay_config("/m.go").with_parse_mode(ParseMode::ImportsOnly);

    let json = run_overlay(&config, archive).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let children = value[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["kind"], "import");
}
