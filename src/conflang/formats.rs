//! Input formats
//!
//! Each format turns source text into a document tree. All built-in formats
//! keep mapping keys in document order and keep integers apart from floats.

pub mod json_format;
pub mod registry;
pub mod toml_format;
pub mod yaml_format;

pub use json_format::JsonFormat;
pub use registry::{Format, FormatError, FormatRegistry};
pub use toml_format::TomlFormat;
pub use yaml_format::YamlFormat;
