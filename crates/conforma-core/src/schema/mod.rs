//! Schema variants and the recursive-descent validation core
//!
//! A [`Schema`] is an immutable-after-construction value describing how to
//! validate and optionally transform an untyped [`serde_json::Value`].
//! Schemas are composed, not inherited: containers own child schemas,
//! modifiers wrap exactly one inner schema, and the whole tree is dispatched
//! through a single exhaustive `match`.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

pub mod choice;
pub mod container;
pub mod datetime;
pub mod modifier;
pub mod primitive;

use crate::error::{ValidationError, ValidationResult};
use serde_json::Value;

pub use choice::{EnumSchema, LiteralSchema, UnionSchema};
pub use container::{ArraySchema, ObjectSchema, RecordSchema};
pub use datetime::DateSchema;
pub use modifier::TransformSchema;
pub use primitive::{BooleanSchema, NumberSchema, StringSchema};

/// A validation rule over untyped input.
///
/// Built once at setup time through the crate-level constructors and the
/// builder methods on each variant, then shared read-only across concurrent
/// `parse` calls. All per-call working state lives on the call stack.
#[derive(Debug, Clone)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Date(DateSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
    Record(RecordSchema),
    Enum(EnumSchema),
    Literal(LiteralSchema),
    Union(UnionSchema),
    /// Absent input passes through; everything else delegates to the inner
    /// schema, including wrong-typed present values.
    Optional(Box<Schema>),
    /// `null` passes through; everything else delegates.
    Nullable(Box<Schema>),
    /// Validates via the inner schema, then maps the accepted value.
    Transform(TransformSchema),
}

impl Schema {
    /// Validate `value` and return the accepted (possibly coerced or
    /// transformed) result, or every collected failure.
    pub fn parse(&self, value: &Value) -> ValidationResult<Value> {
        self.parse_at(value, "")
    }

    /// Validate `value` with issues anchored at `path` or deeper.
    pub fn parse_at(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        log::trace!("parsing value at {:?}", path);
        match self.check(Some(value), path) {
            Ok(out) => Ok(out.unwrap_or(Value::Null)),
            Err(err) => {
                log::debug!("validation failed with {} issue(s)", err.len());
                Err(err)
            }
        }
    }

    /// Recursive validation step.
    ///
    /// Input `None` means "key absent" (distinct from JSON null); output
    /// `None` means "omit from the enclosing object", which only an
    /// `Optional` wrapper over an absent key produces.
    pub(crate) fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult<Option<Value>> {
        match self {
            Schema::Optional(inner) => match value {
                None => Ok(None),
                Some(_) => inner.check(value, path),
            },
            Schema::Nullable(inner) => match value {
                Some(Value::Null) => Ok(Some(Value::Null)),
                _ => inner.check(value, path),
            },
            Schema::Transform(transform) => transform.check(value, path),
            _ => {
                let Some(value) = value else {
                    return Err(ValidationError::single(path, self.type_message()));
                };
                self.check_value(value, path).map(Some)
            }
        }
    }

    /// Validate a present value against a non-wrapper variant.
    fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        match self {
            Schema::String(schema) => schema.check_value(value, path),
            Schema::Number(schema) => schema.check_value(value, path),
            Schema::Boolean(schema) => schema.check_value(value, path),
            Schema::Date(schema) => schema.check_value(value, path),
            Schema::Array(schema) => schema.check_value(value, path),
            Schema::Object(schema) => schema.check_value(value, path),
            Schema::Record(schema) => schema.check_value(value, path),
            Schema::Enum(schema) => schema.check_value(value, path),
            Schema::Literal(schema) => schema.check_value(value, path),
            Schema::Union(schema) => schema.check_value(value, path),
            Schema::Optional(_) | Schema::Nullable(_) | Schema::Transform(_) => {
                unreachable!("wrapper variants are handled in check()")
            }
        }
    }

    /// The message reported when the primary type/shape check fails,
    /// honoring a `with_message` override.
    pub(crate) fn type_message(&self) -> String {
        match self {
            Schema::String(schema) => schema.type_message(),
            Schema::Number(schema) => schema.type_message(),
            Schema::Boolean(schema) => schema.type_message(),
            Schema::Date(schema) => schema.type_message(),
            Schema::Array(schema) => schema.type_message(),
            Schema::Object(schema) => schema.type_message(),
            Schema::Record(schema) => schema.type_message(),
            Schema::Enum(schema) => schema.failure_message(),
            Schema::Literal(schema) => schema.failure_message(),
            Schema::Union(schema) => schema.failure_message(),
            Schema::Optional(inner) | Schema::Nullable(inner) => inner.type_message(),
            Schema::Transform(transform) => transform.inner.type_message(),
        }
    }

    /// Wrap in an `Optional` modifier: absent input passes through.
    pub fn optional(self) -> Self {
        Schema::Optional(Box::new(self))
    }

    /// Wrap in a `Nullable` modifier: `null` passes through.
    pub fn nullable(self) -> Self {
        Schema::Nullable(Box::new(self))
    }

    /// Wrap in a `Transform` modifier: validate first, then map the
    /// accepted value. The function may change the output type entirely.
    pub fn transform<F>(self, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Schema::Transform(TransformSchema::new(self, func))
    }

    /// Replace the default message for this schema's own primary type/shape
    /// failure. Constraint failures and nested child failures keep their own
    /// messages; wrappers forward the override to the node they wrap.
    pub fn with_message<M: Into<String>>(mut self, message: M) -> Self {
        self.set_message(message.into());
        self
    }

    fn set_message(&mut self, message: String) {
        match self {
            Schema::String(schema) => schema.message = Some(message),
            Schema::Number(schema) => schema.message = Some(message),
            Schema::Boolean(schema) => schema.message = Some(message),
            Schema::Date(schema) => schema.message = Some(message),
            Schema::Array(schema) => schema.message = Some(message),
            Schema::Object(schema) => schema.message = Some(message),
            Schema::Record(schema) => schema.message = Some(message),
            Schema::Enum(schema) => schema.message = Some(message),
            Schema::Literal(schema) => schema.message = Some(message),
            Schema::Union(schema) => schema.message = Some(message),
            Schema::Optional(inner) | Schema::Nullable(inner) => inner.set_message(message),
            Schema::Transform(transform) => transform.inner.set_message(message),
        }
    }

    /// True iff an `Optional` appears anywhere in the wrapper chain.
    ///
    /// This is the structural test deciding whether an object key may be
    /// omitted and whether it is excluded from the exported `required` list.
    /// It never trial-parses.
    pub fn is_optional(&self) -> bool {
        match self {
            Schema::Optional(_) => true,
            Schema::Nullable(inner) => inner.is_optional(),
            Schema::Transform(transform) => transform.inner.is_optional(),
            _ => false,
        }
    }
}

/// Modifier adapters for schema builders.
///
/// Every builder that converts into a [`Schema`] picks these up, so chains
/// like `string().min(3).optional()` read the same whether the receiver is
/// still a builder or already a `Schema`.
pub trait SchemaExt: Into<Schema> + Sized {
    /// See [`Schema::optional`].
    fn optional(self) -> Schema {
        self.into().optional()
    }

    /// See [`Schema::nullable`].
    fn nullable(self) -> Schema {
        self.into().nullable()
    }

    /// See [`Schema::transform`].
    fn transform<F>(self, func: F) -> Schema
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.into().transform(func)
    }

    /// See [`Schema::with_message`].
    fn with_message<M: Into<String>>(self, message: M) -> Schema {
        self.into().with_message(message)
    }
}

impl<T: Into<Schema>> SchemaExt for T {}

/// Build the path for an object key: bare key at the root, dotted below.
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Build the path for an array index.
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{number, object, string};
    use serde_json::json;

    #[test]
    fn test_child_path_composition() {
        assert_eq!(child_path("", "name"), "name");
        assert_eq!(child_path("address", "city"), "address.city");
        assert_eq!(index_path("", 0), "[0]");
        assert_eq!(index_path("tags", 2), "tags[2]");
    }

    #[test]
    fn test_parse_at_anchors_issues() {
        let schema: Schema = string().into();
        let err = schema.parse_at(&json!(42), "body.title").unwrap_err();
        assert_eq!(err.issues[0].path, "body.title");
    }

    #[test]
    fn test_nested_path_composition() {
        let schema: Schema = object()
            .field("address", object().field("city", string()))
            .into();
        let err = schema
            .parse(&json!({"address": {"city": 123}}))
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.issues[0].path, "address.city");
    }

    #[test]
    fn test_is_optional_through_wrapper_chain() {
        let plain: Schema = string().into();
        assert!(!plain.is_optional());

        let direct = Schema::from(string()).optional();
        assert!(direct.is_optional());

        let nested = Schema::from(number()).optional().nullable();
        assert!(nested.is_optional());

        let transformed = Schema::from(number())
            .optional()
            .transform(|v| v);
        assert!(transformed.is_optional());
    }

    #[test]
    fn test_with_message_reaches_through_wrappers() {
        let schema = Schema::from(string())
            .nullable()
            .with_message("Name must be text");
        let err = schema.parse(&json!(7)).unwrap_err();
        assert_eq!(err.issues[0].message, "Name must be text");
    }

    #[test]
    fn test_schema_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
