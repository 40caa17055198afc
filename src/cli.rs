//! Command-line argument parsing for the outliner
//!
//! Supports:
//! - Outlining a file from disk
//! - Restricting the outline to the import prefix
//! - Reading unsaved content from an overlay archive on stdin

use clap::Parser;
use std::path::PathBuf;

use crate::config::{OutlineConfig, ParseMode, SourceMode};

/// Print a JSON outline of a Go source file
#[derive(Parser, Debug)]
#[command(
    name = "go-outline",
    version,
    about = "Print a JSON outline of a Go source file"
)]
pub struct CliArgs {
    /// The path to the file to outline
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Parse imports only
    #[arg(long)]
    pub imports_only: bool,

    /// Read an archive of the modified file from standard input
    #[arg(long)]
    pub modified: bool,

    /// Also write debug logs to a daily-rotated file in DIR
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into the run configuration
    pub fn into_config(self) -> Result<OutlineConfig, String> {
        if self.file.as_os_str().is_empty() {
            return Err("no file to outline (use -f <FILE>)".to_string());
        }

        let parse_mode = if self.imports_only {
            ParseMode::ImportsOnly
        } else {
            ParseMode::Full
        };

        let source_mode = if self.modified {
            SourceMode::Overlay
        } else {
            SourceMode::Disk
        };

        Ok(OutlineConfig {
            file: self.file,
            parse_mode,
            source_mode,
            log_dir: self.log_dir,
        })
    }
}

/// Flatten a clap error to a single line, dropping the usage section
pub fn one_line_error(err: &clap::Error) -> String {
    let text = err.to_string();
    let message = text
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    match message.strip_prefix("error: ") {
        Some(rest) => rest.to_string(),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: &str) -> CliArgs {
        CliArgs {
            file: PathBuf::from(file),
            imports_only: false,
            modified: false,
            log_dir: None,
        }
    }

    #[test]
    fn test_defaults_to_full_parse_from_disk() {
        let config = args("main.go").into_config().unwrap();
        assert_eq!(config.file, PathBuf::from("main.go"));
        assert_eq!(config.parse_mode, ParseMode::Full);
        assert_eq!(config.source_mode, SourceMode::Disk);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_imports_only_flag() {
        let mut a = args("main.go");
        a.imports_only = true;
        let config = a.into_config().unwrap();
        assert_eq!(config.parse_mode, ParseMode::ImportsOnly);
    }

    #[test]
    fn test_modified_flag_reads_overlay() {
        let mut a = args("/a/b.go");
        a.modified = true;
        let config = a.into_config().unwrap();
        assert_eq!(config.source_mode, SourceMode::Overlay);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        assert!(args("").into_config().is_err());
    }

    #[test]
    fn test_parse_from_argv() {
        let parsed = CliArgs::try_parse_from([
            "go-outline",
            "-f",
            "x.go",
            "--imports-only",
            "--modified",
        ])
        .unwrap();
        assert_eq!(parsed.file, PathBuf::from("x.go"));
        assert!(parsed.imports_only);
        assert!(parsed.modified);
    }

    #[test]
    fn test_file_is_required() {
        assert!(CliArgs::try_parse_from(["go-outline"]).is_err());
    }

    #[test]
    fn test_missing_file_flag_is_one_line() {
        let err = CliArgs::try_parse_from(["go-outline"]).unwrap_err();
        let message = one_line_error(&err);
        assert!(!message.contains('\n'), "{message}");
        assert!(!message.starts_with("error:"), "{message}");
        assert!(message.contains("--file"), "{message}");
        assert!(!message.contains("Usage"), "{message}");
    }

    #[test]
    fn test_unknown_flag_is_one_line() {
        let err = CliArgs::try_parse_from(["go-outline", "-f", "x.go", "--bogus"]).unwrap_err();
        let message = one_line_error(&err);
        assert!(!message.contains('\n'), "{message}");
        assert!(message.contains("--bogus"), "{message}");
    }
}
