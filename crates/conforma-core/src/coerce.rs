//! Coercing schema constructors
//!
//! Query strings and route parameters arrive as strings regardless of the
//! declared type; these constructors build primitive schemas that convert
//! the input before running the constraint chain. Conversion rules:
//!
//! - `string()` accepts strings unchanged and renders numbers/booleans in
//!   their canonical form; anything else fails.
//! - `number()` trims string input, rejects empty strings, and parses
//!   numerically; non-finite results fail.
//! - `boolean()` maps `"true"`/`"1"` to true and `"false"`/`"0"`/`""` to
//!   false, case-insensitively; anything else fails.
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use crate::schema::{BooleanSchema, NumberSchema, StringSchema};

/// A string schema that coerces numeric and boolean input.
pub fn string() -> StringSchema {
    StringSchema::new(true)
}

/// A number schema that coerces trimmed string input.
pub fn number() -> NumberSchema {
    NumberSchema::new(true)
}

/// A boolean schema that coerces the conventional string forms.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new(true)
}
