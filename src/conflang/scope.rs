//! Scope of top-level constants visible to expressions
//!
//! A scope lives for exactly one translation run. The renderer binds each
//! numeric top-level entry once it is resolved, so an expression only ever
//! sees the constants declared above it. Bindings keep declaration order.

use super::ast::Number;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scope {
    bindings: IndexMap<String, Number>,
}

impl Scope {
    /// Create an empty scope
    pub fn new() -> Self {
        Scope {
            bindings: IndexMap::new(),
        }
    }

    /// Bind `name` to `value`, replacing any earlier binding in place
    pub fn bind(&mut self, name: impl Into<String>, value: Number) {
        self.bindings.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Number> {
        self.bindings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names, in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> + '_ {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, Number)> for Scope {
    fn from_iter<I: IntoIterator<Item = (K, Number)>>(iter: I) -> Self {
        let mut scope = Scope::new();
        for (name, value) in iter {
            scope.bind(name, value);
        }
        scope
    }
}
