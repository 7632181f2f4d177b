//! JSON input format

use super::registry::{Format, FormatError};
use crate::conflang::ast::{Node, Number};
use serde_json::Value;

/// JSON documents
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn description(&self) -> &str {
        "JSON document (objects keep their key order)"
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        let value: Value = serde_json::from_str(source).map_err(|e| FormatError::ParseError {
            format: "json".to_string(),
            message: e.to_string(),
        })?;
        Ok(value_to_node(value))
    }
}

fn value_to_node(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Node::Number(Number::Int(i)),
            // u64 beyond i64 and every non-integer land here
            None => Node::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        Value::String(s) => Node::Text(s),
        Value::Array(items) => Node::List(items.into_iter().map(value_to_node).collect()),
        Value::Object(map) => Node::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, value_to_node(value)))
                .collect(),
        ),
    }
}
