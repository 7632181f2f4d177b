//! Translation errors
//!
//! Every error aborts the whole translation; no partial output is kept.

use std::fmt;

/// Broad category of a translation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad key, or reference to an unknown constant
    Naming,
    /// Text leaf that is not a well-formed expression
    Syntax,
    /// Expression operator outside `+`, `-`, `sqrt`
    Operator,
    /// Arithmetic with no representable result
    Domain,
    /// Node that cannot be rendered at all
    Structural,
}

/// Errors that can occur during translation
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// Mapping key does not match `[_a-zA-Z][_a-zA-Z0-9]*`
    InvalidName(String),
    /// Expression refers to a constant not (yet) in scope
    UnresolvedReference(String),
    /// Text leaf that does not match the expression syntax
    MalformedExpression(String),
    /// `+` or `-` without a literal
    MissingOperand { operator: String, expr: String },
    /// Integer literal that does not fit the integer range
    LiteralOutOfRange(String),
    UnknownOperator(String),
    /// `sqrt` of a negative constant
    NegativeSqrt { name: String, value: String },
    /// Integer arithmetic overflowed
    Overflow { operator: String, name: String },
    UnsupportedNode { kind: &'static str, repr: String },
    RootNotMapping(&'static str),
}

impl TranslationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::InvalidName(_) | TranslationError::UnresolvedReference(_) => {
                ErrorKind::Naming
            }
            TranslationError::MalformedExpression(_)
            | TranslationError::MissingOperand { .. }
            | TranslationError::LiteralOutOfRange(_) => ErrorKind::Syntax,
            TranslationError::UnknownOperator(_) => ErrorKind::Operator,
            TranslationError::NegativeSqrt { .. } | TranslationError::Overflow { .. } => {
                ErrorKind::Domain
            }
            TranslationError::UnsupportedNode { .. } | TranslationError::RootNotMapping(_) => {
                ErrorKind::Structural
            }
        }
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::InvalidName(name) => write!(
                f,
                "Names should be [_a-zA-Z][_a-zA-Z0-9]* but \"{name}\" found"
            ),
            TranslationError::UnresolvedReference(name) => write!(f, "const {name} not found"),
            TranslationError::MalformedExpression(expr) => write!(f, "Wrong expr: {expr}"),
            TranslationError::MissingOperand { operator, expr } => {
                write!(f, "Operator {operator} needs a literal operand in {expr}")
            }
            TranslationError::LiteralOutOfRange(literal) => {
                write!(f, "Literal {literal} is out of range")
            }
            TranslationError::UnknownOperator(op) => write!(f, "Unknown operator {op}"),
            TranslationError::NegativeSqrt { name, value } => {
                write!(f, "Cannot take sqrt of const {name} = {value}: value is negative")
            }
            TranslationError::Overflow { operator, name } => {
                write!(f, "Integer overflow applying {operator} to const {name}")
            }
            TranslationError::UnsupportedNode { kind, repr } => {
                write!(f, "Unknown type {kind} at line: \"{repr}\"")
            }
            TranslationError::RootNotMapping(kind) => {
                write!(f, "Document root must be a mapping, found {kind}")
            }
        }
    }
}

impl std::error::Error for TranslationError {}
