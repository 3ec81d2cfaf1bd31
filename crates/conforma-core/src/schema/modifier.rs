//! Modifier wrappers
//!
//! `Optional` and `Nullable` are plain boxed variants on [`Schema`]; this
//! module holds the one wrapper that needs its own state, `Transform`.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::error::ValidationResult;
use crate::schema::Schema;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Validate through the inner schema, then map the accepted value.
///
/// The function runs only on success; validation failures propagate
/// untouched. The function itself is trusted user code: the engine catches
/// only its own `ValidationError`, so a panic inside the function unwinds
/// to the caller unchanged.
#[derive(Clone)]
pub struct TransformSchema {
    pub(crate) inner: Box<Schema>,
    func: Arc<dyn Fn(Value) -> Value + Send + Sync>,
}

impl TransformSchema {
    pub(crate) fn new<F>(inner: Schema, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(inner),
            func: Arc::new(func),
        }
    }

    pub(crate) fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult<Option<Value>> {
        match self.inner.check(value, path)? {
            Some(parsed) => Ok(Some((self.func)(parsed))),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for TransformSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformSchema")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaExt;
    use crate::{number, object, string};
    use serde_json::json;

    #[test]
    fn test_optional_short_circuits_on_absence_only() {
        let schema: Schema = object()
            .field("age", number().optional())
            .into();
        // absent: passes, key omitted
        assert_eq!(schema.parse(&json!({})).unwrap(), json!({}));
        // present but wrong-typed: optional does not waive the type check
        let err = schema.parse(&json!({"age": "x"})).unwrap_err();
        assert_eq!(err.issues[0].path, "age");
        assert_eq!(err.issues[0].message, "Expected number");
        // present null is not absence
        assert!(schema.parse(&json!({"age": null})).is_err());
    }

    #[test]
    fn test_nullable_passes_null_through() {
        let schema = Schema::from(string()).nullable();
        assert_eq!(schema.parse(&json!(null)).unwrap(), json!(null));
        assert_eq!(schema.parse(&json!("a")).unwrap(), json!("a"));
        let err = schema.parse(&json!(5)).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected string");
    }

    #[test]
    fn test_transform_runs_after_validation() {
        let schema = Schema::from(string()).transform(|v| {
            json!(v.as_str().map(str::len).unwrap_or(0))
        });
        // output type changed from string to number
        assert_eq!(schema.parse(&json!("hello")).unwrap(), json!(5));
        // validation failure propagates untouched, transform never runs
        let err = schema.parse(&json!(1)).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected string");
    }

    #[test]
    fn test_transform_respects_inner_constraints() {
        let schema = string().min(2).transform(|v| v);
        let err = schema.parse(&json!("a")).unwrap_err();
        assert_eq!(err.issues[0].message, "String must be at least 2 characters");
    }

    #[test]
    fn test_transform_skips_absent_optional() {
        let schema: Schema = object()
            .field(
                "nickname",
                Schema::from(string()).optional().transform(|v| v),
            )
            .into();
        assert_eq!(schema.parse(&json!({})).unwrap(), json!({}));
    }

    #[test]
    fn test_optional_nullable_stacking() {
        let schema: Schema = object()
            .field("note", Schema::from(string()).nullable().optional())
            .into();
        assert_eq!(schema.parse(&json!({})).unwrap(), json!({}));
        assert_eq!(
            schema.parse(&json!({"note": null})).unwrap(),
            json!({"note": null})
        );
        assert_eq!(
            schema.parse(&json!({"note": "hi"})).unwrap(),
            json!({"note": "hi"})
        );
    }
}
