//! Outline extraction from tree-sitter parse trees
//!
//! Classifies every top-level declaration of a parsed Go file. The match
//! over node kinds is closed: anything unrecognized aborts the outline
//! instead of being skipped.

use tree_sitter::Node;

use super::{OutlineKind, OutlineNode, OutlineRange};
use crate::error::{OutlineError, Result};
use crate::syntax::{render_type, ParsedFile};

/// Extract the outline of `file`: a one-element list holding the package
/// root, whose children are the top-level declarations in source order.
pub fn extract_outline(file: &ParsedFile) -> Result<Vec<OutlineNode>> {
    let declarations = file.declarations();

    let mut children = Vec::new();
    for decl in &declarations {
        collect_declaration(file, decl, &mut children)?;
    }

    let root = package_node(file, declarations.last(), children)?;
    tracing::debug!(
        package = %root.label,
        children = root.children.len(),
        "extracted outline"
    );
    Ok(vec![root])
}

// =============================================================================
// Declaration blocks
// =============================================================================

/// Keyword of a grouped declaration block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Import,
    Type,
    Const,
    Var,
}

impl Block {
    fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "import_declaration" => Some(Block::Import),
            "type_declaration" => Some(Block::Type),
            "const_declaration" => Some(Block::Const),
            "var_declaration" => Some(Block::Var),
            _ => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Block::Import => "import",
            Block::Type => "type",
            Block::Const => "const",
            Block::Var => "var",
        }
    }

    /// Parenthesized spec list node inside this block, if the grammar has one
    fn list_kind(self) -> Option<&'static str> {
        match self {
            Block::Import => Some("import_spec_list"),
            Block::Var => Some("var_spec_list"),
            Block::Type | Block::Const => None,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn node_range(node: &Node) -> OutlineRange {
    OutlineRange::from_bytes(node.start_byte(), node.end_byte())
}

/// Span of an identifier slot, or `None` when the slot is empty
fn identifier_range(node: &Node) -> Option<OutlineRange> {
    if node.is_missing() || node.start_byte() == node.end_byte() {
        return None;
    }
    Some(node_range(node))
}

fn child_by_field<'a>(node: &Node<'a>, field: &str) -> Option<Node<'a>> {
    node.child_by_field_name(field)
}

fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

// =============================================================================
// Classification
// =============================================================================

fn collect_declaration(
    file: &ParsedFile,
    decl: &Node,
    out: &mut Vec<OutlineNode>,
) -> Result<()> {
    match decl.kind() {
        "function_declaration" => out.push(function_node(file, decl, None)),
        "method_declaration" => {
            let receiver = receiver_type(file, decl)?;
            out.push(function_node(file, decl, Some(receiver)));
        }
        kind => match Block::from_kind(kind) {
            Some(block) => collect_specs(file, block, decl, out)?,
            None => {
                return Err(OutlineError::UnknownDeclaration {
                    kind: kind.to_string(),
                    location: file.location(decl),
                })
            }
        },
    }
    Ok(())
}

fn collect_specs(
    file: &ParsedFile,
    block: Block,
    node: &Node,
    out: &mut Vec<OutlineNode>,
) -> Result<()> {
    for spec in named_children(node) {
        match (block, spec.kind()) {
            (_, kind) if block.list_kind() == Some(kind) => {
                collect_specs(file, block, &spec, out)?;
            }
            (Block::Import, "import_spec") => out.push(import_node(file, &spec)),
            (Block::Type, "type_spec" | "type_alias") => out.push(type_node(file, &spec)),
            (Block::Const, "const_spec") | (Block::Var, "var_spec") => {
                collect_value_spec(file, block, &spec, out);
            }
            (_, kind) => {
                return Err(OutlineError::UnknownSpec {
                    block: block.keyword(),
                    kind: kind.to_string(),
                    location: file.location(&spec),
                })
            }
        }
    }
    Ok(())
}

fn function_node(file: &ParsedFile, decl: &Node, receiver_type: Option<String>) -> OutlineNode {
    let name = child_by_field(decl, "name");
    let label = name.map_or("", |name| file.text(&name));

    let mut node = OutlineNode::leaf(OutlineKind::Function, label, node_range(decl))
        .with_identifier(name.as_ref().and_then(identifier_range));
    node.receiver_type = receiver_type;
    node
}

/// Render the type of the method's first receiver parameter
fn receiver_type(file: &ParsedFile, decl: &Node) -> Result<String> {
    let render_error = |node: &Node, message: String| OutlineError::Render {
        location: file.location(node),
        message,
    };

    let param = child_by_field(decl, "receiver")
        .and_then(|receiver| {
            named_children(&receiver).into_iter().find(|param| {
                matches!(
                    param.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
        })
        .ok_or_else(|| render_error(decl, "method has no receiver".to_string()))?;

    let type_node = child_by_field(&param, "type")
        .ok_or_else(|| render_error(&param, "receiver has no type".to_string()))?;

    render_type(type_node, file.source()).map_err(|e| render_error(&type_node, e.to_string()))
}

fn import_node(file: &ParsedFile, spec: &Node) -> OutlineNode {
    let label = child_by_field(spec, "path").map_or("", |path| file.text(&path));
    let alias = child_by_field(spec, "name");

    OutlineNode::leaf(OutlineKind::Import, label, node_range(spec))
        .with_identifier(alias.as_ref().and_then(identifier_range))
}

fn type_node(file: &ParsedFile, spec: &Node) -> OutlineNode {
    let name = child_by_field(spec, "name");
    let label = name.map_or("", |name| file.text(&name));

    OutlineNode::leaf(OutlineKind::Type, label, node_range(spec))
        .with_identifier(name.as_ref().and_then(identifier_range))
}

/// One node per identifier bound by a const/var spec, left to right. Each
/// node spans just its identifier so names sharing a line stay addressable.
fn collect_value_spec(
    file: &ParsedFile,
    block: Block,
    spec: &Node,
    out: &mut Vec<OutlineNode>,
) {
    let kind = if block == Block::Const {
        OutlineKind::Constant
    } else {
        OutlineKind::Variable
    };

    let mut cursor = spec.walk();
    let names: Vec<Node> = spec
        .children_by_field_name("name", &mut cursor)
        .filter(|name| name.is_named())
        .collect();

    for name in names {
        out.push(
            OutlineNode::leaf(kind, file.text(&name), node_range(&name))
                .with_identifier(identifier_range(&name)),
        );
    }
}

// =============================================================================
// Root
// =============================================================================

fn package_node(
    file: &ParsedFile,
    last_decl: Option<&Node>,
    children: Vec<OutlineNode>,
) -> Result<OutlineNode> {
    let (Some(clause), Some(name)) = (file.package_clause(), file.package_name()) else {
        return Err(OutlineError::Parse {
            path: file.path().to_path_buf(),
            message: "expected 'package'".to_string(),
        });
    };

    let end = last_decl.map_or(name.end_byte(), |decl| decl.end_byte());
    let range = OutlineRange::from_bytes(clause.start_byte(), end.max(name.end_byte()));

    let mut root = OutlineNode::leaf(OutlineKind::Package, file.text(&name), range)
        .with_identifier(identifier_range(&name));
    root.children = children;
    Ok(root)
}
