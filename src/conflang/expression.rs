//! Embedded expressions
//!
//! A text leaf of the form `^(<op> <name> [<literal>])` computes a number from
//! a constant already in scope:
//!
//! ```text
//! ^(+ a 5)      a + 5
//! ^(- a 3.2)    a - 3.2
//! ^(sqrt a)     square root of a
//! ```
//!
//! The result is an integer only when the constant is an integer and the
//! literal is made of decimal digits alone; otherwise it is a float. `sqrt`
//! always yields a float.

use super::ast::Number;
use super::error::TranslationError;
use super::scope::Scope;
use once_cell::sync::Lazy;
use regex::Regex;

/// Full-match expression grammar
///
/// A literal must be followed directly by `)`; blanks before `)` are only
/// allowed when there is no literal.
static EXPRESSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\A\^\((?P<op>[^\s()]+)\s+(?P<name>[^\s()]+)(?:\s+(?P<literal>[0-9]+(?:\.[0-9]*)?|\.[0-9]+)|\s*)\)\z",
    )
    .unwrap()
});

/// Known expression operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Sqrt,
}

impl Operator {
    pub fn from_token(token: &str) -> Result<Self, TranslationError> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "sqrt" => Ok(Operator::Sqrt),
            _ => Err(TranslationError::UnknownOperator(token.to_string())),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Sqrt => "sqrt",
        }
    }
}

/// A recognized expression, not yet evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    source: String,
    operator: String,
    name: String,
    literal: Option<String>,
}

impl Expression {
    /// Recognize `text` as an expression; `None` if it does not match the syntax
    pub fn parse(text: &str) -> Option<Self> {
        let caps = EXPRESSION_REGEX.captures(text)?;
        Some(Expression {
            source: text.to_string(),
            operator: caps["op"].to_string(),
            name: caps["name"].to_string(),
            literal: caps.name("literal").map(|m| m.as_str().to_string()),
        })
    }

    /// Operator token as written
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Name of the referenced constant
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Compute the value against `scope`. The scope is not modified.
    pub fn evaluate(&self, scope: &Scope) -> Result<Number, TranslationError> {
        let value = scope
            .get(&self.name)
            .ok_or_else(|| TranslationError::UnresolvedReference(self.name.clone()))?;

        match Operator::from_token(&self.operator)? {
            Operator::Sqrt => self.sqrt(value),
            op => self.shift(op, value),
        }
    }

    fn sqrt(&self, value: Number) -> Result<Number, TranslationError> {
        if let Some(literal) = &self.literal {
            log::warn!("ignoring literal {literal} in {}", self.source);
        }
        let x = value.as_f64();
        if x < 0.0 {
            return Err(TranslationError::NegativeSqrt {
                name: self.name.clone(),
                value: value.to_string(),
            });
        }
        Ok(Number::Float(x.sqrt()))
    }

    fn shift(&self, op: Operator, value: Number) -> Result<Number, TranslationError> {
        let literal = self
            .literal
            .as_deref()
            .ok_or_else(|| TranslationError::MissingOperand {
                operator: op.token().to_string(),
                expr: self.source.clone(),
            })?;
        let integral = literal.bytes().all(|b| b.is_ascii_digit());

        match value {
            Number::Int(lhs) if integral => {
                let rhs: i64 = literal
                    .parse()
                    .map_err(|_| TranslationError::LiteralOutOfRange(literal.to_string()))?;
                let result = match op {
                    Operator::Sub => lhs.checked_sub(rhs),
                    _ => lhs.checked_add(rhs),
                };
                result.map(Number::Int).ok_or_else(|| TranslationError::Overflow {
                    operator: op.token().to_string(),
                    name: self.name.clone(),
                })
            }
            _ => {
                let rhs: f64 = literal
                    .parse()
                    .map_err(|_| TranslationError::LiteralOutOfRange(literal.to_string()))?;
                let lhs = value.as_f64();
                Ok(Number::Float(match op {
                    Operator::Sub => lhs - rhs,
                    _ => lhs + rhs,
                }))
            }
        }
    }
}

/// Recognize and evaluate `text` in one step
pub fn evaluate(text: &str, scope: &Scope) -> Result<Number, TranslationError> {
    Expression::parse(text)
        .ok_or_else(|| TranslationError::MalformedExpression(text.to_string()))?
        .evaluate(scope)
}
