//! Tree-sitter parser state for Go files
//!
//! Parses one file, rejects syntax errors, and exposes the package clause
//! and the top-level declarations the outline is built from.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::config::ParseMode;
use crate::error::{Location, OutlineError, Result};
use crate::source::SourceText;

/// Longest snippet of offending source quoted in a syntax error
const SNIPPET_LEN: usize = 32;

/// Parser instance bound to the Go grammar
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse `source`, failing on any syntax error in the region `mode`
    /// considers.
    pub fn parse(&mut self, source: SourceText, mode: ParseMode) -> Result<ParsedFile> {
        let SourceText { path, text } = source;

        let Some(tree) = self.parser.parse(&text, None) else {
            return Err(OutlineError::Parse {
                path,
                message: "parser produced no tree".to_string(),
            });
        };

        let file = ParsedFile {
            path,
            source: text,
            tree,
            mode,
        };
        file.validate()?;

        tracing::debug!(
            path = %file.path.display(),
            mode = ?mode,
            declarations = file.declarations().len(),
            "parsed file"
        );
        Ok(file)
    }
}

/// A syntactically valid Go file
pub struct ParsedFile {
    path: PathBuf,
    source: String,
    tree: Tree,
    mode: ParseMode,
}

impl ParsedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The `package` clause. Always present once parsing succeeded.
    pub fn package_clause(&self) -> Option<Node<'_>> {
        self.top_level()
            .into_iter()
            .next()
            .filter(|node| node.kind() == "package_clause")
    }

    /// The package name token inside the package clause
    pub fn package_name(&self) -> Option<Node<'_>> {
        let clause = self.package_clause()?;
        let mut cursor = clause.walk();
        let name = clause
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_identifier");
        name
    }

    /// Top-level declarations in source order, without the package clause
    /// or comments. In [`ParseMode::ImportsOnly`] this stops at the first
    /// declaration that is not an import.
    pub fn declarations(&self) -> Vec<Node<'_>> {
        let decls = self.top_level().into_iter().skip(1);
        match self.mode {
            ParseMode::Full => decls.collect(),
            ParseMode::ImportsOnly => decls
                .take_while(|node| node.kind() == "import_declaration")
                .collect(),
        }
    }

    /// Source text covered by `node`
    pub fn text(&self, node: &Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// 1-based location of the start of `node`
    pub fn location(&self, node: &Node) -> Location {
        let start = node.start_position();
        Location {
            path: self.path.clone(),
            line: start.row + 1,
            column: start.column + 1,
        }
    }

    fn top_level(&self) -> Vec<Node<'_>> {
        let root = self.tree.root_node();
        let mut cursor = root.walk();
        let nodes = root
            .named_children(&mut cursor)
            .filter(|node| node.kind() != "comment")
            .collect();
        nodes
    }

    fn validate(&self) -> Result<()> {
        let top = self.top_level();

        // Everything past the import prefix is never looked at in
        // imports-only mode, so its syntax errors do not count.
        let limit = match self.mode {
            ParseMode::Full => usize::MAX,
            ParseMode::ImportsOnly => {
                let prefix_end = top
                    .iter()
                    .skip(1)
                    .take_while(|node| node.kind() == "import_declaration")
                    .last()
                    .or(top.first())
                    .map_or(0, |node| node.end_byte());

                // A broken import right after the prefix still belongs to it
                let next = top.iter().find(|node| node.start_byte() >= prefix_end);
                match next {
                    Some(node) if node.is_error() && self.text(node).starts_with("import") => {
                        node.end_byte()
                    }
                    _ => prefix_end,
                }
            }
        };

        if let Some(bad) = first_syntax_error(self.tree.root_node(), limit) {
            return Err(self.parse_error(self.describe_syntax_error(&bad)));
        }

        match top.first() {
            Some(node) if node.kind() == "package_clause" => {}
            Some(node) => {
                let location = self.location(node);
                return Err(self.parse_error(format!(
                    "{}:{}: expected 'package', found {}",
                    location.line,
                    location.column,
                    node.kind()
                )));
            }
            None => return Err(self.parse_error("expected 'package', found EOF".to_string())),
        }

        if self.mode == ParseMode::Full {
            let mut seen_other = false;
            for node in top.iter().skip(1) {
                if node.kind() != "import_declaration" {
                    seen_other = true;
                } else if seen_other {
                    let location = self.location(node);
                    return Err(self.parse_error(format!(
                        "{}:{}: imports must appear before other declarations",
                        location.line, location.column
                    )));
                }
            }
        }

        Ok(())
    }

    fn describe_syntax_error(&self, node: &Node) -> String {
        let location = self.location(node);
        if node.is_missing() {
            return format!(
                "{}:{}: syntax error: missing {}",
                location.line,
                location.column,
                node.kind()
            );
        }

        let snippet: String = self
            .text(node)
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(SNIPPET_LEN)
            .collect();
        format!(
            "{}:{}: syntax error near `{}`",
            location.line,
            location.column,
            snippet.trim()
        )
    }

    fn parse_error(&self, message: String) -> OutlineError {
        OutlineError::Parse {
            path: self.path.clone(),
            message,
        }
    }
}

/// First ERROR or MISSING node (in document order) starting before `limit`
fn first_syntax_error(node: Node<'_>, limit: usize) -> Option<Node<'_>> {
    if node.start_byte() >= limit || !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child, limit) {
            return Some(found);
        }
    }
    None
}
