//! Primitive schemas: string, number, boolean
//!
//! Each primitive performs a fail-fast type check followed by its attached
//! constraints, evaluated in attachment order. The same structs back the
//! coercing variants: with the coercion flag set, a type conversion from
//! string or primitive input runs before the constraint chain, so `min`,
//! `pattern` and friends always see the coerced value.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use regex::Regex;
use serde_json::Value;

/// String validation with ordered length and pattern constraints.
#[derive(Debug, Clone)]
pub struct StringSchema {
    pub(crate) checks: Vec<StringCheck>,
    pub(crate) message: Option<String>,
    pub(crate) coerce: bool,
}

#[derive(Debug, Clone)]
pub(crate) enum StringCheck {
    Min(usize),
    Max(usize),
    Pattern { source: String, regex: Regex },
}

impl StringSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            checks: Vec::new(),
            message: None,
            coerce,
        }
    }

    /// Require at least `n` characters.
    pub fn min(mut self, n: usize) -> Self {
        self.checks.push(StringCheck::Min(n));
        self
    }

    /// Require at most `n` characters.
    pub fn max(mut self, n: usize) -> Self {
        self.checks.push(StringCheck::Max(n));
        self
    }

    /// Require the whole string to match `pattern`.
    ///
    /// The pattern is anchored internally, so `[a-z]+` accepts `"abc"` but
    /// not `"abc1"`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Schemas are
    /// built once at setup time, so an invalid pattern is a programming
    /// error, not a runtime condition.
    pub fn pattern(mut self, pattern: &str) -> Self {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .unwrap_or_else(|e| panic!("invalid pattern {:?}: {}", pattern, e));
        self.checks.push(StringCheck::Pattern {
            source: pattern.to_string(),
            regex,
        });
        self
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected string".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) if self.coerce => n.to_string(),
            Value::Bool(b) if self.coerce => b.to_string(),
            _ => return Err(ValidationError::single(path, self.type_message())),
        };

        for check in &self.checks {
            match check {
                StringCheck::Min(n) => {
                    if text.chars().count() < *n {
                        return Err(ValidationError::single(
                            path,
                            format!("String must be at least {} characters", n),
                        ));
                    }
                }
                StringCheck::Max(n) => {
                    if text.chars().count() > *n {
                        return Err(ValidationError::single(
                            path,
                            format!("String must be at most {} characters", n),
                        ));
                    }
                }
                StringCheck::Pattern { regex, .. } => {
                    if !regex.is_match(&text) {
                        return Err(ValidationError::single(
                            path,
                            "String does not match the expected pattern",
                        ));
                    }
                }
            }
        }

        Ok(Value::String(text))
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

/// Number validation with ordered range and integrality constraints.
#[derive(Debug, Clone)]
pub struct NumberSchema {
    pub(crate) checks: Vec<NumberCheck>,
    pub(crate) message: Option<String>,
    pub(crate) coerce: bool,
}

#[derive(Debug, Clone)]
pub(crate) enum NumberCheck {
    Min(f64),
    Max(f64),
    Integer,
}

impl NumberSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            checks: Vec::new(),
            message: None,
            coerce,
        }
    }

    /// Require the value to be at least `n`.
    pub fn min(mut self, n: f64) -> Self {
        self.checks.push(NumberCheck::Min(n));
        self
    }

    /// Require the value to be at most `n`.
    pub fn max(mut self, n: f64) -> Self {
        self.checks.push(NumberCheck::Max(n));
        self
    }

    /// Require the value to be a whole number.
    pub fn integer(mut self) -> Self {
        self.checks.push(NumberCheck::Integer);
        self
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected number".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        let (num, out) = match value {
            Value::Number(n) => {
                let f = n.as_f64().unwrap_or(f64::NAN);
                (f, value.clone())
            }
            Value::String(s) if self.coerce => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::single(path, self.type_message()));
                }
                let f: f64 = trimmed
                    .parse()
                    .map_err(|_| ValidationError::single(path, self.type_message()))?;
                (f, number_value(f))
            }
            _ => return Err(ValidationError::single(path, self.type_message())),
        };

        if !num.is_finite() {
            return Err(ValidationError::single(path, self.type_message()));
        }

        for check in &self.checks {
            match check {
                NumberCheck::Min(n) => {
                    if num < *n {
                        return Err(ValidationError::single(
                            path,
                            format!("Number must be at least {}", n),
                        ));
                    }
                }
                NumberCheck::Max(n) => {
                    if num > *n {
                        return Err(ValidationError::single(
                            path,
                            format!("Number must be at most {}", n),
                        ));
                    }
                }
                NumberCheck::Integer => {
                    if num.fract() != 0.0 {
                        return Err(ValidationError::single(path, "Expected integer"));
                    }
                }
            }
        }

        Ok(out)
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Schema::Number(schema)
    }
}

/// Render a parsed numeric value, preferring the integer representation so
/// that coercing `"42"` yields the JSON integer `42` rather than `42.0`.
fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Value::from(f)
    }
}

/// Boolean validation.
#[derive(Debug, Clone)]
pub struct BooleanSchema {
    pub(crate) message: Option<String>,
    pub(crate) coerce: bool,
}

impl BooleanSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            message: None,
            coerce,
        }
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected boolean".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) if self.coerce => match s.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" | "" => Ok(Value::Bool(false)),
                _ => Err(ValidationError::single(path, self.type_message())),
            },
            _ => Err(ValidationError::single(path, self.type_message())),
        }
    }
}

impl From<BooleanSchema> for Schema {
    fn from(schema: BooleanSchema) -> Self {
        Schema::Boolean(schema)
    }
}
