//! # conflang
//!
//! Translates configuration trees (TOML, JSON, YAML) into conflang constant
//! declarations.
//!
//! The core is [`conflang::render::translate`]: it validates keys, evaluates
//! `^(op name literal)` expressions against earlier top-level constants, and
//! renders nested mappings into indented blocks. Everything else in the crate
//! is the loading and writing glue around it.

pub mod conflang;
