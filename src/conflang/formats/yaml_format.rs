//! YAML input format

use super::registry::{Format, FormatError};
use crate::conflang::ast::{Node, Number};
use serde_yaml::Value;

/// YAML documents
///
/// Only string mapping keys are accepted, and tagged values are rejected.
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn description(&self) -> &str {
        "YAML document (mappings keep their key order)"
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        let value: Value = serde_yaml::from_str(source).map_err(|e| FormatError::ParseError {
            format: "yaml".to_string(),
            message: e.to_string(),
        })?;
        value_to_node(value)
    }
}

fn unsupported(message: String) -> FormatError {
    FormatError::Unsupported {
        format: "yaml".to_string(),
        message,
    }
}

fn value_to_node(value: Value) -> Result<Node, FormatError> {
    Ok(match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Node::Number(Number::Int(i)),
            None => Node::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        Value::String(s) => Node::Text(s),
        Value::Sequence(items) => Node::List(
            items
                .into_iter()
                .map(value_to_node)
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, value) in map {
                let Value::String(key) = key else {
                    return Err(unsupported(format!("non-string mapping key {key:?}")));
                };
                entries.push((key, value_to_node(value)?));
            }
            Node::Mapping(entries)
        }
        Value::Tagged(tagged) => {
            return Err(unsupported(format!("tagged value {}", tagged.tag)));
        }
    })
}
