//! Document loading and output API
//!
//! This module is the entry point for file-based translation.
//!
//! # Architecture
//!
//! - String-based methods are the core functionality (parse and translate source text)
//! - File-based methods are thin wrappers (read file, then call the string method)
//! - Format selection goes through the `FormatRegistry`: an explicit format
//!   name wins, otherwise the file extension decides
//!
//! # Examples
//!
//! ```rust,ignore
//! use conflang::conflang::loader::{write_output, DocumentLoader};
//!
//! let loader = DocumentLoader::new();
//!
//! // Translate a string
//! let text = loader.translate("a = 1\n", "toml")?;
//!
//! // Translate a file, format taken from its extension
//! let (text, constants) = loader.translate_file("config.toml", None)?;
//! write_output("config.out", &text)?;
//! ```

use super::ast::Node;
use super::error::TranslationError;
use super::formats::{FormatError, FormatRegistry};
use super::render::{translate, translate_with_scope};
use super::scope::Scope;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading, translating or writing a document
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Io { path: PathBuf, message: String },
    Format(FormatError),
    Translation(TranslationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, message } => write!(f, "{}: {message}", path.display()),
            LoadError::Format(e) => write!(f, "{e}"),
            LoadError::Translation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { .. } => None,
            LoadError::Format(e) => Some(e),
            LoadError::Translation(e) => Some(e),
        }
    }
}

impl From<FormatError> for LoadError {
    fn from(err: FormatError) -> Self {
        LoadError::Format(err)
    }
}

impl From<TranslationError> for LoadError {
    fn from(err: TranslationError) -> Self {
        LoadError::Translation(err)
    }
}

/// Primary API for loading documents and translating them
pub struct DocumentLoader {
    registry: FormatRegistry,
}

impl DocumentLoader {
    /// Create a loader with the built-in formats
    pub fn new() -> Self {
        Self {
            registry: FormatRegistry::with_defaults(),
        }
    }

    /// Create a loader with a custom registry
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    // ===== STRING-BASED PROCESSING (core methods) =====

    /// Parse source text in the named format
    pub fn parse(&self, source: &str, format: &str) -> Result<Node, LoadError> {
        Ok(self.registry.parse(source, format)?)
    }

    /// Parse and translate source text in the named format
    pub fn translate(&self, source: &str, format: &str) -> Result<String, LoadError> {
        let doc = self.parse(source, format)?;
        Ok(translate(&doc)?)
    }

    // ===== FILE-BASED PROCESSING (convenience wrappers) =====

    /// Load a document from a file
    ///
    /// `format` names a registered format; when `None` the file extension is used.
    pub fn load<P: AsRef<Path>>(&self, path: P, format: Option<&str>) -> Result<Node, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let format = match format {
            Some(name) => self
                .registry
                .get(name)
                .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))?,
            None => self.registry.for_path(path)?,
        };
        log::debug!("loading {} as {}", path.display(), format.name());
        Ok(format.parse(&source)?)
    }

    /// Load and translate a file, returning the text and the declared constants
    pub fn translate_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: Option<&str>,
    ) -> Result<(String, Scope), LoadError> {
        let doc = self.load(path, format)?;
        Ok(translate_with_scope(&doc)?)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Write rendered text to `path` verbatim
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<(), LoadError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
