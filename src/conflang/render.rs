//! Tree renderer
//!
//! Walks the document tree depth-first, in document order, and produces
//! conflang text. The root mapping becomes one `const` declaration per entry;
//! nested mappings become indented blocks:
//!
//! ```text
//! const a = 10;
//! const b = {
//!     c : 20,
//!     d : {
//!         e : 15,
//!     },
//! };
//! ```
//!
//! Numeric top-level entries are bound into the run's [`Scope`] as soon as
//! they are resolved, which is what makes them visible to expressions in
//! later siblings. Nothing else ever enters the scope.

use super::ast::{Node, Number};
use super::error::TranslationError;
use super::expression;
use super::identifier::is_identifier;
use super::scope::Scope;
use std::fmt;

const INDENT: &str = "    ";

/// Result of rendering a single node
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// A number or evaluated expression, emitted inline by the parent
    Numeric(Number),
    /// A rendered nested mapping, braces included
    Block(String),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Numeric(n) => write!(f, "{n}"),
            Rendered::Block(text) => f.write_str(text),
        }
    }
}

/// Translate a whole document with a fresh scope
pub fn translate(document: &Node) -> Result<String, TranslationError> {
    translate_with_scope(document).map(|(text, _)| text)
}

/// Translate a whole document, also returning the constants it declared
pub fn translate_with_scope(document: &Node) -> Result<(String, Scope), TranslationError> {
    let Node::Mapping(entries) = document else {
        return Err(TranslationError::RootNotMapping(document.kind()));
    };

    let mut scope = Scope::new();
    let text = render_mapping(entries, &mut scope, 0, true)?;
    log::debug!("translated {} top-level entries", entries.len());
    Ok((text, scope))
}

/// Render `node` found at `depth`
///
/// A single-element list is transparent: its element is rendered in its place,
/// at the same depth, as a non-root node.
pub fn render(
    node: &Node,
    scope: &mut Scope,
    depth: usize,
    is_root: bool,
) -> Result<Rendered, TranslationError> {
    match node {
        Node::Mapping(entries) => render_mapping(entries, scope, depth, is_root).map(Rendered::Block),
        Node::Number(n) => Ok(Rendered::Numeric(*n)),
        Node::Text(text) => expression::evaluate(text, scope).map(Rendered::Numeric),
        Node::List(items) if items.len() == 1 => render(&items[0], scope, depth, false),
        other => Err(TranslationError::UnsupportedNode {
            kind: other.kind(),
            repr: other.to_string(),
        }),
    }
}

fn render_mapping(
    entries: &[(String, Node)],
    scope: &mut Scope,
    depth: usize,
    is_root: bool,
) -> Result<String, TranslationError> {
    let indent = INDENT.repeat(depth);
    let mut lines = Vec::with_capacity(entries.len() + 2);
    if !is_root {
        lines.push("{".to_string());
    }

    for (key, value) in entries {
        if !is_identifier(key) {
            return Err(TranslationError::InvalidName(key.clone()));
        }

        let rendered = render(value, scope, depth + 1, false)?;
        log::trace!("depth {depth}: {key} = {rendered}");

        if is_root {
            if let Rendered::Numeric(n) = rendered {
                log::debug!("bound const {key} = {n}");
                scope.bind(key.as_str(), n);
            }
            lines.push(format!("const {key} = {rendered};"));
        } else {
            lines.push(format!("{indent}{key} : {rendered},"));
        }
    }

    if !is_root {
        lines.push(format!("{}}}", INDENT.repeat(depth.saturating_sub(1))));
    }
    Ok(lines.join("\n"))
}
