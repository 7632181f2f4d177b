//! TOML input format

use super::registry::{Format, FormatError};
use crate::conflang::ast::Node;

/// TOML documents; the top level is always a table
pub struct TomlFormat;

impl Format for TomlFormat {
    fn name(&self) -> &str {
        "toml"
    }

    fn extensions(&self) -> &[&str] {
        &["toml"]
    }

    fn description(&self) -> &str {
        "TOML document (tables keep their key order)"
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        let table: toml::Table = toml::from_str(source).map_err(|e| FormatError::ParseError {
            format: "toml".to_string(),
            message: e.to_string(),
        })?;
        Ok(table_to_node(table))
    }
}

fn table_to_node(table: toml::Table) -> Node {
    Node::Mapping(
        table
            .into_iter()
            .map(|(key, value)| (key, value_to_node(value)))
            .collect(),
    )
}

fn value_to_node(value: toml::Value) -> Node {
    match value {
        toml::Value::String(s) => Node::Text(s),
        toml::Value::Integer(i) => Node::from(i),
        toml::Value::Float(f) => Node::from(f),
        toml::Value::Boolean(b) => Node::Bool(b),
        toml::Value::Datetime(dt) => Node::Datetime(dt.to_string()),
        toml::Value::Array(items) => Node::List(items.into_iter().map(value_to_node).collect()),
        toml::Value::Table(table) => table_to_node(table),
    }
}
