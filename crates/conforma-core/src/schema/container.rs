//! Container schemas: array, object, record
//!
//! Containers recurse into child schemas, extend the path as they descend,
//! and accumulate every child failure before deciding whether to raise.
//! This is the central usability property of the engine: one parse call
//! surfaces every problem in the input, not just the first.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::error::{Issue, ValidationError, ValidationResult};
use crate::schema::{child_path, index_path, Schema};
use serde_json::{Map, Value};

/// Array validation: length constraints plus a per-element schema.
#[derive(Debug, Clone)]
pub struct ArraySchema {
    pub(crate) item: Box<Schema>,
    pub(crate) min: Option<usize>,
    pub(crate) max: Option<usize>,
    pub(crate) message: Option<String>,
}

impl ArraySchema {
    pub(crate) fn new(item: Schema) -> Self {
        Self {
            item: Box::new(item),
            min: None,
            max: None,
            message: None,
        }
    }

    /// Require at least `n` elements.
    pub fn min(mut self, n: usize) -> Self {
        self.min = Some(n);
        self
    }

    /// Require at most `n` elements.
    pub fn max(mut self, n: usize) -> Self {
        self.max = Some(n);
        self
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected array".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        let Value::Array(items) = value else {
            return Err(ValidationError::single(path, self.type_message()));
        };

        // Length checks run before any element is visited.
        if let Some(n) = self.min {
            if items.len() < n {
                return Err(ValidationError::single(
                    path,
                    format!("Array must contain at least {} elements", n),
                ));
            }
        }
        if let Some(n) = self.max {
            if items.len() > n {
                return Err(ValidationError::single(
                    path,
                    format!("Array must contain at most {} elements", n),
                ));
            }
        }

        let mut issues: Vec<Issue> = Vec::new();
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.item.check(Some(item), &index_path(path, index)) {
                Ok(parsed) => out.push(parsed.unwrap_or(Value::Null)),
                Err(err) => issues.extend(err.issues),
            }
        }

        if issues.is_empty() {
            Ok(Value::Array(out))
        } else {
            Err(ValidationError::from_issues(issues))
        }
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(schema)
    }
}

/// Object validation over a declared shape.
///
/// Keys are validated in declaration order; unknown keys are stripped. The
/// output is rebuilt field by field, never a mutation of the input.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub(crate) shape: Vec<(String, Schema)>,
    pub(crate) message: Option<String>,
}

impl ObjectSchema {
    pub(crate) fn new() -> Self {
        Self {
            shape: Vec::new(),
            message: None,
        }
    }

    /// Declare a field. Declaration order is validation order.
    pub fn field<K, S>(mut self, name: K, schema: S) -> Self
    where
        K: Into<String>,
        S: Into<Schema>,
    {
        self.shape.push((name.into(), schema.into()));
        self
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected object".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        // serde_json already distinguishes arrays and null from objects, so
        // both are rejected by this single shape check.
        let Value::Object(input) = value else {
            return Err(ValidationError::single(path, self.type_message()));
        };

        let mut issues: Vec<Issue> = Vec::new();
        let mut out = Map::new();
        for (key, schema) in &self.shape {
            let field_path = child_path(path, key);
            match schema.check(input.get(key), &field_path) {
                // An absent optional field is omitted entirely, not stored
                // as null.
                Ok(None) => {}
                Ok(Some(parsed)) => {
                    out.insert(key.clone(), parsed);
                }
                Err(err) => issues.extend(err.issues),
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(out))
        } else {
            Err(ValidationError::from_issues(issues))
        }
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}

/// Record validation: every value of an open key set against one schema.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub(crate) value: Box<Schema>,
    pub(crate) message: Option<String>,
}

impl RecordSchema {
    pub(crate) fn new(value: Schema) -> Self {
        Self {
            value: Box::new(value),
            message: None,
        }
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected object".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        let Value::Object(input) = value else {
            return Err(ValidationError::single(path, self.type_message()));
        };

        let mut issues: Vec<Issue> = Vec::new();
        let mut out = Map::new();
        for (key, entry) in input {
            let entry_path = child_path(path, key);
            match self.value.check(Some(entry), &entry_path) {
                Ok(parsed) => {
                    out.insert(key.clone(), parsed.unwrap_or(Value::Null));
                }
                Err(err) => issues.extend(err.issues),
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(out))
        } else {
            Err(ValidationError::from_issues(issues))
        }
    }
}

impl From<RecordSchema> for Schema {
    fn from(schema: RecordSchema) -> Self {
        Schema::Record(schema)
    }
}
