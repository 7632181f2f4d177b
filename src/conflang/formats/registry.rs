//! Format registry for input documents
//!
//! This module provides a pluggable registry of input formats. Each format
//! implements the `Format` trait and can be registered with `FormatRegistry`,
//! then looked up by name or by file extension.

use crate::conflang::ast::Node;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Error that can occur while reading a document
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// No registered format claims this file extension
    UnknownExtension(String),
    /// Source text is not valid in the format
    ParseError { format: String, message: String },
    /// Valid source that has no document tree equivalent
    Unsupported { format: String, message: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::UnknownExtension(ext) => {
                write!(f, "No format registered for extension '{ext}'")
            }
            FormatError::ParseError { format, message } => {
                write!(f, "Invalid {format} document: {message}")
            }
            FormatError::Unsupported { format, message } => {
                write!(f, "Unsupported {format} content: {message}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for input formats
///
/// Implementors parse source text into a document tree.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "toml", "json")
    fn name(&self) -> &str;

    /// File extensions handled by this format, without the dot
    fn extensions(&self) -> &[&str];

    /// Parse source text into a document tree
    fn parse(&self, source: &str) -> Result<Node, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of input formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats.insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Option<&dyn Format> {
        self.formats.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Find the format whose extensions include the extension of `path`
    ///
    /// Extensions are compared case-insensitively.
    pub fn for_path(&self, path: &Path) -> Result<&dyn Format, FormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mut names: Vec<_> = self.formats.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| self.formats[name].as_ref())
            .find(|format| format.extensions().contains(&ext.as_str()))
            .ok_or(FormatError::UnknownExtension(ext))
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Node, FormatError> {
        let format = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        format.parse(source)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in formats
        registry.register(super::TomlFormat);
        registry.register(super::JsonFormat);
        registry.register(super::YamlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
