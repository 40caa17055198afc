//! Rendering type expressions back to source text
//!
//! Joins the leaf tokens of a subtree with gofmt spacing, so `* T` and
//! `Pair[K,V]` come out as `*T` and `Pair[K, V]`.

use thiserror::Error;
use tree_sitter::Node;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("empty type expression")]
    Empty,

    #[error("malformed type expression near `{0}`")]
    Malformed(String),

    #[error("type expression is missing {0}")]
    Missing(String),
}

/// Print the type expression rooted at `node`
pub fn render_type(node: Node<'_>, source: &str) -> Result<String, RenderError> {
    let mut tokens = Vec::new();
    collect_tokens(node, source, &mut tokens)?;

    let tokens = drop_trailing_terminators(tokens);

    let mut rendered = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let before = i.checked_sub(2).map(|j| tokens[j]);
            if needs_space(before, tokens[i - 1], token) {
                rendered.push(' ');
            }
        }
        rendered.push_str(token);
    }

    if rendered.is_empty() {
        return Err(RenderError::Empty);
    }
    Ok(rendered)
}

fn collect_tokens<'s>(
    node: Node<'_>,
    source: &'s str,
    tokens: &mut Vec<&'s str>,
) -> Result<(), RenderError> {
    let text = source
        .get(node.byte_range())
        .ok_or_else(|| RenderError::Malformed(node.kind().to_string()))?;

    if node.is_missing() {
        return Err(RenderError::Missing(node.kind().to_string()));
    }
    if node.is_error() {
        return Err(RenderError::Malformed(text.trim().to_string()));
    }

    match node.kind() {
        "comment" => {}
        kind if node.child_count() == 0 || kind.ends_with("string_literal") => {
            // Newline terminators between struct fields print as `;`
            if text.trim().is_empty() {
                if !text.is_empty() && tokens.last().is_some_and(|last| *last != ";") {
                    tokens.push(";");
                }
            } else {
                tokens.push(text);
            }
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect_tokens(child, source, tokens)?;
            }
        }
    }
    Ok(())
}

/// Remove `;` terminators that directly precede a closing `}`
fn drop_trailing_terminators(tokens: Vec<&str>) -> Vec<&str> {
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token == "}" && kept.last() == Some(&";") {
            kept.pop();
        }
        kept.push(token);
    }
    kept
}

fn is_word(token: &str, at_end: bool) -> bool {
    let c = if at_end {
        token.chars().last()
    } else {
        token.chars().next()
    };
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Whether gofmt separates `prev` and `next` with a space. `before` is the
/// token ahead of `prev`, needed for `chan<- T`.
fn needs_space(before: Option<&str>, prev: &str, next: &str) -> bool {
    match (prev, next) {
        ("," | ";", _) => true,
        ("{", "}") => false,
        ("{", _) | (_, "}") => true,
        ("chan", "<-") => false,
        ("chan", _) => true,
        ("<-", _) => before == Some("chan"),
        (")", ")" | "," | "]" | ";" | ".") => false,
        (")", _) => true,
        _ => is_word(prev, true) && is_word(next, false),
    }
}
