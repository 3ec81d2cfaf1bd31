//! Document exporter: schema trees to JSON-Schema-shaped descriptions
//!
//! `describe` is a pure metadata walk consumed by documentation tooling. It
//! never fails, runs no constraint logic, and is idempotent regardless of
//! prior parse calls or failures.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::schema::primitive::{NumberCheck, StringCheck};
use crate::schema::Schema;
use serde_json::{json, Map, Value};

impl Schema {
    /// Produce a JSON-Schema-like structural description of this schema.
    pub fn describe(&self) -> Value {
        match self {
            Schema::String(schema) => {
                let mut doc = Map::new();
                doc.insert("type".to_string(), json!("string"));
                for check in &schema.checks {
                    match check {
                        StringCheck::Min(n) => {
                            doc.insert("minLength".to_string(), json!(n));
                        }
                        StringCheck::Max(n) => {
                            doc.insert("maxLength".to_string(), json!(n));
                        }
                        StringCheck::Pattern { source, .. } => {
                            doc.insert("pattern".to_string(), json!(source));
                        }
                    }
                }
                Value::Object(doc)
            }
            Schema::Number(schema) => {
                let integer = schema
                    .checks
                    .iter()
                    .any(|check| matches!(check, NumberCheck::Integer));
                let mut doc = Map::new();
                doc.insert(
                    "type".to_string(),
                    json!(if integer { "integer" } else { "number" }),
                );
                for check in &schema.checks {
                    match check {
                        NumberCheck::Min(n) => {
                            doc.insert("minimum".to_string(), json!(n));
                        }
                        NumberCheck::Max(n) => {
                            doc.insert("maximum".to_string(), json!(n));
                        }
                        NumberCheck::Integer => {}
                    }
                }
                Value::Object(doc)
            }
            Schema::Boolean(_) => json!({"type": "boolean"}),
            Schema::Date(schema) => {
                let mut doc = Map::new();
                doc.insert("type".to_string(), json!("string"));
                doc.insert("format".to_string(), json!("date-time"));
                if let Some(min) = schema.min {
                    doc.insert("formatMinimum".to_string(), json!(min.to_rfc3339()));
                }
                if let Some(max) = schema.max {
                    doc.insert("formatMaximum".to_string(), json!(max.to_rfc3339()));
                }
                Value::Object(doc)
            }
            Schema::Array(schema) => {
                let mut doc = Map::new();
                doc.insert("type".to_string(), json!("array"));
                doc.insert("items".to_string(), schema.item.describe());
                if let Some(n) = schema.min {
                    doc.insert("minItems".to_string(), json!(n));
                }
                if let Some(n) = schema.max {
                    doc.insert("maxItems".to_string(), json!(n));
                }
                Value::Object(doc)
            }
            Schema::Object(schema) => {
                let mut properties = Map::new();
                let mut required = Vec::new();
                for (key, field) in &schema.shape {
                    properties.insert(key.clone(), field.describe());
                    if !field.is_optional() {
                        required.push(json!(key));
                    }
                }
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": required,
                })
            }
            Schema::Record(schema) => json!({
                "type": "object",
                "additionalProperties": schema.value.describe(),
            }),
            Schema::Enum(schema) => json!({
                "type": "string",
                "enum": schema.values,
            }),
            Schema::Literal(schema) => json!({"const": schema.value}),
            Schema::Union(schema) => {
                let members: Vec<Value> =
                    schema.members.iter().map(Schema::describe).collect();
                json!({"anyOf": members})
            }
            Schema::Optional(inner) => inner.describe(),
            Schema::Nullable(inner) => json!({
                "anyOf": [inner.describe(), {"type": "null"}],
            }),
            Schema::Transform(transform) => transform.inner.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaExt;
    use crate::{array, boolean, date, enumeration, literal, number, object, record, string, union};
    use serde_json::json;

    #[test]
    fn test_string_document_carries_constraint_keywords() {
        let schema: Schema = string().min(1).max(10).pattern("[a-z]+").into();
        assert_eq!(
            schema.describe(),
            json!({
                "type": "string",
                "minLength": 1,
                "maxLength": 10,
                "pattern": "[a-z]+",
            })
        );
    }

    #[test]
    fn test_integer_constraint_flips_type_keyword() {
        let schema: Schema = number().integer().min(0.0).into();
        assert_eq!(
            schema.describe(),
            json!({"type": "integer", "minimum": 0.0})
        );
        let plain: Schema = number().into();
        assert_eq!(plain.describe(), json!({"type": "number"}));
    }

    #[test]
    fn test_boolean_document() {
        let schema: Schema = boolean().into();
        assert_eq!(schema.describe(), json!({"type": "boolean"}));
    }

    #[test]
    fn test_array_document() {
        let schema: Schema = array(string()).min(1).max(5).into();
        assert_eq!(
            schema.describe(),
            json!({
                "type": "array",
                "items": {"type": "string"},
                "minItems": 1,
                "maxItems": 5,
            })
        );
    }

    #[test]
    fn test_object_required_excludes_optional_chains() {
        let schema: Schema = object()
            .field("name", string())
            .field("age", number().optional())
            .field("note", Schema::from(string()).optional().nullable())
            .into();
        let doc = schema.describe();
        assert_eq!(doc["required"], json!(["name"]));
        assert_eq!(doc["properties"]["age"], json!({"type": "number"}));
    }

    #[test]
    fn test_enum_literal_union_record_documents() {
        let e: Schema = enumeration(["a", "b"]).into();
        assert_eq!(e.describe(), json!({"type": "string", "enum": ["a", "b"]}));

        let l: Schema = literal(42).into();
        assert_eq!(l.describe(), json!({"const": 42}));

        let u: Schema = union([string().into(), number().into()]).into();
        assert_eq!(
            u.describe(),
            json!({"anyOf": [{"type": "string"}, {"type": "number"}]})
        );

        let r: Schema = record(boolean()).into();
        assert_eq!(
            r.describe(),
            json!({"type": "object", "additionalProperties": {"type": "boolean"}})
        );
    }

    #[test]
    fn test_nullable_document_admits_null() {
        let schema = Schema::from(string()).nullable();
        assert_eq!(
            schema.describe(),
            json!({"anyOf": [{"type": "string"}, {"type": "null"}]})
        );
    }

    #[test]
    fn test_date_document_names_bounds() {
        use chrono::TimeZone;
        let min = chrono::Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let schema: Schema = date().min(min).into();
        assert_eq!(
            schema.describe(),
            json!({
                "type": "string",
                "format": "date-time",
                "formatMinimum": "2026-01-01T00:00:00+00:00",
            })
        );
    }

    #[test]
    fn test_describe_is_idempotent_and_unaffected_by_parse_failures() {
        let schema: Schema = object().field("name", string().min(1)).into();
        let before = schema.describe();
        let _ = schema.parse(&json!({"name": ""}));
        let _ = schema.parse(&json!([]));
        let after = schema.describe();
        assert_eq!(before, after);
    }
}
