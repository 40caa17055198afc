//! Code outline extraction
//!
//! Provides structural symbol extraction from tree-sitter parse trees.
//! The outline is a single `package` root whose children are the file's
//! top-level declarations, serialized as JSON for editors.

mod extract;

pub use extract::extract_outline;

use serde::Serialize;

/// Symbol kind for display and categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKind {
    Package,
    Import,
    Type,
    Function,
    Variable,
    Constant,
}

/// Opaque position in the parsed file: byte offset plus one, so the first
/// byte is position 1 and 0 never names a real position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pos(pub usize);

impl Pos {
    pub fn from_byte(offset: usize) -> Self {
        Pos(offset + 1)
    }

    /// Byte offset this position refers to
    pub fn byte(self) -> usize {
        self.0.saturating_sub(1)
    }
}

/// A half-open span of positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OutlineRange {
    pub start: Pos,
    pub end: Pos,
}

impl OutlineRange {
    pub fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Pos::from_byte(start),
            end: Pos::from_byte(end),
        }
    }

    pub fn contains(&self, other: &OutlineRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &OutlineRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A single node in the outline tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    pub label: String,
    pub kind: OutlineKind,
    /// Rendered receiver type, only for methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_type: Option<String>,
    pub range: OutlineRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_range: Option<OutlineRange>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// A childless node without receiver or identifier range
    pub fn leaf(kind: OutlineKind, label: impl Into<String>, range: OutlineRange) -> Self {
        Self {
            label: label.into(),
            kind,
            receiver_type: None,
            range,
            identifier_range: None,
            children: Vec::new(),
        }
    }

    pub fn with_identifier(mut self, identifier_range: Option<OutlineRange>) -> Self {
        self.identifier_range = identifier_range;
        self
    }

    /// This node followed by all of its descendants, depth first
    pub fn descendants(&self) -> Vec<&OutlineNode> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.descendants());
        }
        nodes
    }
}
