//! Sum-type schemas: enum, literal, union
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use serde_json::Value;

/// Fixed string value set.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    pub(crate) values: Vec<String>,
    pub(crate) message: Option<String>,
}

impl EnumSchema {
    pub(crate) fn new(values: Vec<String>) -> Self {
        Self {
            values,
            message: None,
        }
    }

    /// Membership failure message, enumerating every valid value.
    pub(crate) fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Expected one of: {}", self.values.join(", ")))
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        match value {
            Value::String(s) if self.values.iter().any(|v| v == s) => Ok(value.clone()),
            _ => Err(ValidationError::single(path, self.failure_message())),
        }
    }
}

impl From<EnumSchema> for Schema {
    fn from(schema: EnumSchema) -> Self {
        Schema::Enum(schema)
    }
}

/// Exact-value match, strict across type and value.
#[derive(Debug, Clone)]
pub struct LiteralSchema {
    pub(crate) value: Value,
    pub(crate) message: Option<String>,
}

impl LiteralSchema {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            message: None,
        }
    }

    pub(crate) fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Expected literal value {}", self.value))
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        if literal_eq(value, &self.value) {
            Ok(self.value.clone())
        } else {
            Err(ValidationError::single(path, self.failure_message()))
        }
    }
}

impl From<LiteralSchema> for Schema {
    fn from(schema: LiteralSchema) -> Self {
        Schema::Literal(schema)
    }
}

/// Strict equality with numeric comparison across integer and float
/// representations, so the literal `1` accepts `1.0`.
fn literal_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Ordered alternation: first member that parses wins.
#[derive(Debug, Clone)]
pub struct UnionSchema {
    pub(crate) members: Vec<Schema>,
    pub(crate) message: Option<String>,
}

impl UnionSchema {
    pub(crate) fn new(members: Vec<Schema>) -> Self {
        Self {
            members,
            message: None,
        }
    }

    /// Single generic failure message. Per-member diagnostics are discarded
    /// deliberately; downstream error-shape consumers depend on this exact
    /// text.
    pub(crate) fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Value does not match any type in the union".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        for member in &self.members {
            if let Ok(parsed) = member.check(Some(value), path) {
                return Ok(parsed.unwrap_or(Value::Null));
            }
        }
        Err(ValidationError::single(path, self.failure_message()))
    }
}

impl From<UnionSchema> for Schema {
    fn from(schema: UnionSchema) -> Self {
        Schema::Union(schema)
    }
}
