//! Conforma Core - runtime validation engine for untyped request data
//!
//! Given an untyped value (decoded JSON, a query-string map, or a
//! route-parameter map) and a declaratively-built schema, this crate either
//! produces a well-typed value or a complete, path-annotated list of
//! validation failures.
//!
//! # Main Components
//!
//! - **Issues & Errors**: `(path, message)` failure pairs bundled into a
//!   single [`ValidationError`], the engine's only failure type
//! - **Schemas**: a closed set of variants (primitives, containers, sum
//!   types, modifiers) dispatched through one exhaustive `match`
//! - **Coercion**: string-transport variants that convert before validating
//! - **Document Export**: [`Schema::describe`] renders JSON-Schema-shaped
//!   documents for external documentation tooling
//!
//! # Example
//!
//! ```rust
//! use conforma_core::prelude::*;
//! use serde_json::json;
//!
//! let schema: Schema = object()
//!     .field("name", string().min(1))
//!     .field("age", number().integer().optional())
//!     .into();
//!
//! let user = schema.parse(&json!({"name": "Alice", "extra": true})).unwrap();
//! assert_eq!(user, json!({"name": "Alice"}));
//!
//! let err = schema.parse(&json!({"name": 1, "age": "x"})).unwrap_err();
//! assert_eq!(err.issues.len(), 2);
//! ```
//!
//! # Error Aggregation
//!
//! Primitives and sum types fail fast on their first violated check.
//! Containers (array, object, record) always visit every child and raise
//! the union of child issues, so a single `parse` call reports every
//! problem in the input. Unions discard member diagnostics and raise one
//! generic issue.
//!
//! # Concurrency
//!
//! Schemas are built once at setup time and are immutable afterwards;
//! `parse` keeps all working state on its own call stack, so a shared
//! schema may be parsed from any number of threads concurrently.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

pub mod coerce;
mod describe;
pub mod error;
pub mod schema;

pub use error::{Issue, ValidationError, ValidationResult};
pub use schema::{
    ArraySchema, BooleanSchema, DateSchema, EnumSchema, LiteralSchema, NumberSchema,
    ObjectSchema, RecordSchema, Schema, SchemaExt, StringSchema, TransformSchema, UnionSchema,
};

use serde_json::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a string schema.
pub fn string() -> StringSchema {
    StringSchema::new(false)
}

/// Create a number schema.
pub fn number() -> NumberSchema {
    NumberSchema::new(false)
}

/// Create a boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new(false)
}

/// Create a date schema.
pub fn date() -> DateSchema {
    DateSchema::new()
}

/// Create an array schema validating every element against `item`.
pub fn array<S: Into<Schema>>(item: S) -> ArraySchema {
    ArraySchema::new(item.into())
}

/// Create an empty object schema; declare fields with
/// [`ObjectSchema::field`].
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

/// Create a record schema validating every value against `value`.
pub fn record<S: Into<Schema>>(value: S) -> RecordSchema {
    RecordSchema::new(value.into())
}

/// Create an enum schema over a fixed set of string values.
pub fn enumeration<I, S>(values: I) -> EnumSchema
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EnumSchema::new(values.into_iter().map(Into::into).collect())
}

/// Create a literal schema matching exactly `value`.
pub fn literal<V: Into<Value>>(value: V) -> LiteralSchema {
    LiteralSchema::new(value.into())
}

/// Create a union schema trying each member in declaration order.
pub fn union<I>(members: I) -> UnionSchema
where
    I: IntoIterator<Item = Schema>,
{
    UnionSchema::new(members.into_iter().collect())
}

/// Common imports for building and running schemas.
pub mod prelude {
    pub use crate::coerce;
    pub use crate::error::{Issue, ValidationError, ValidationResult};
    pub use crate::schema::{Schema, SchemaExt};
    pub use crate::{
        array, boolean, date, enumeration, literal, number, object, record, string, union,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constructors_compose() {
        let schema: Schema = object()
            .field("role", enumeration(["admin", "user"]))
            .field("tags", array(string()))
            .field("meta", record(boolean()))
            .into();
        assert!(matches!(schema, Schema::Object(_)));
    }
}
