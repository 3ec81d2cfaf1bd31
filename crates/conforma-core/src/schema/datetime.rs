//! Date schema: string-to-instant parsing with range constraints
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Date validation: accepts RFC 3339 datetimes or plain `YYYY-MM-DD` dates
/// (interpreted as UTC midnight) and yields the normalized RFC 3339 string.
#[derive(Debug, Clone)]
pub struct DateSchema {
    pub(crate) min: Option<DateTime<Utc>>,
    pub(crate) max: Option<DateTime<Utc>>,
    pub(crate) message: Option<String>,
}

impl DateSchema {
    pub(crate) fn new() -> Self {
        Self {
            min: None,
            max: None,
            message: None,
        }
    }

    /// Require the instant to be on or after `boundary`.
    pub fn min(mut self, boundary: DateTime<Utc>) -> Self {
        self.min = Some(boundary);
        self
    }

    /// Require the instant to be on or before `boundary`.
    pub fn max(mut self, boundary: DateTime<Utc>) -> Self {
        self.max = Some(boundary);
        self
    }

    pub(crate) fn type_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Expected date string".to_string())
    }

    pub(crate) fn check_value(&self, value: &Value, path: &str) -> ValidationResult<Value> {
        let Value::String(raw) = value else {
            return Err(ValidationError::single(path, self.type_message()));
        };

        let Some(instant) = parse_instant(raw) else {
            return Err(ValidationError::single(path, "Invalid date"));
        };

        if let Some(min) = self.min {
            if instant < min {
                return Err(ValidationError::single(
                    path,
                    format!("Date must not be before {}", min.to_rfc3339()),
                ));
            }
        }
        if let Some(max) = self.max {
            if instant > max {
                return Err(ValidationError::single(
                    path,
                    format!("Date must not be after {}", max.to_rfc3339()),
                ));
            }
        }

        Ok(Value::String(instant.to_rfc3339()))
    }
}

impl From<DateSchema> for Schema {
    fn from(schema: DateSchema) -> Self {
        Schema::Date(schema)
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0)?,
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_accepts_rfc3339_datetime() {
        let schema: Schema = date().into();
        let parsed = schema.parse(&json!("2026-03-01T12:30:00Z")).unwrap();
        assert_eq!(parsed, json!("2026-03-01T12:30:00+00:00"));
    }

    #[test]
    fn test_accepts_plain_date_as_utc_midnight() {
        let schema: Schema = date().into();
        let parsed = schema.parse(&json!("2026-03-01")).unwrap();
        assert_eq!(parsed, json!("2026-03-01T00:00:00+00:00"));
    }

    #[test]
    fn test_normalizes_offset_to_utc() {
        let schema: Schema = date().into();
        let parsed = schema.parse(&json!("2026-03-01T02:00:00+02:00")).unwrap();
        assert_eq!(parsed, json!("2026-03-01T00:00:00+00:00"));
    }

    #[test]
    fn test_rejects_non_strings() {
        let schema: Schema = date().into();
        let err = schema.parse(&json!(1234567890)).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected date string");
    }

    #[test]
    fn test_rejects_unparseable_dates() {
        let schema: Schema = date().into();
        for input in ["not a date", "2026-13-40", "2026/03/01"] {
            let err = schema.parse(&json!(input)).unwrap_err();
            assert_eq!(err.issues[0].message, "Invalid date", "input {:?}", input);
        }
    }

    #[test]
    fn test_min_boundary_named_in_message() {
        let boundary = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let schema: Schema = date().min(boundary).into();
        assert!(schema.parse(&json!("2026-06-01")).is_ok());
        let err = schema.parse(&json!("2025-12-31")).unwrap_err();
        assert_eq!(
            err.issues[0].message,
            "Date must not be before 2026-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_max_boundary_fail_fast_after_min() {
        let min = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();
        let schema: Schema = date().min(min).max(max).into();
        let err = schema.parse(&json!("2027-06-01")).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err.issues[0].message,
            "Date must not be after 2026-12-31T00:00:00+00:00"
        );
    }
}
