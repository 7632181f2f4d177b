//! Main module for conflang library functionality

pub mod ast;
pub mod error;
pub mod expression;
pub mod formats;
pub mod identifier;
pub mod loader;
pub mod render;
pub mod scope;

pub use ast::{Node, Number};
pub use error::{ErrorKind, TranslationError};
pub use render::{translate, translate_with_scope, Rendered};
pub use scope::Scope;
