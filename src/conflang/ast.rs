//! Document tree
//!
//! The in-memory form of a loaded configuration document. Loaders build it,
//! the renderer walks it. Mappings keep their keys in document order.
//!
//! Only `Mapping`, `Number`, `Text` and single-element `List` nodes can be
//! rendered. `Bool`, `Null` and `Datetime` exist so that a loader can hand
//! them through and the renderer can reject them by kind.

use serde::Serialize;
use std::fmt;

/// A numeric scalar, keeping the integer/float distinction of the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) if x.is_nan() => f.write_str("nan"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "inf" } else { "-inf" })
            }
            Number::Float(x) => write_float(f, x),
        }
    }
}

/// Shortest round-trip form: `15.0` in the decimal range, `1e+16` and
/// `1.5e-05` outside it (signed exponent of at least two digits).
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    // Debug switches to exponent form below 1e-4 and from 1e16 on.
    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&repr),
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered key/value pairs
    Mapping(Vec<(String, Node)>),
    Number(Number),
    /// String scalar; rendered only if it is an expression
    Text(String),
    /// Renderable only when it holds exactly one element
    List(Vec<Node>),
    Bool(bool),
    Null,
    /// Date/time scalar, kept as its source text
    Datetime(String),
}

impl Node {
    /// Build a mapping from `(key, node)` pairs, keeping their order
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Name of the node kind, as used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Number(Number::Int(_)) => "int",
            Node::Number(Number::Float(_)) => "float",
            Node::Text(_) => "str",
            Node::List(_) => "list",
            Node::Bool(_) => "bool",
            Node::Null => "null",
            Node::Datetime(_) => "datetime",
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(Number::Int(value))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(Number::Float(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

/// Compact, source-like text of a node for diagnostics
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Node::Number(n) => write!(f, "{n}"),
            Node::Text(s) => write!(f, "{s:?}"),
            Node::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Node::Bool(b) => write!(f, "{b}"),
            Node::Null => f.write_str("null"),
            Node::Datetime(s) => f.write_str(s),
        }
    }
}
