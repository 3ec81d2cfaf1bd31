//! Validation failure reporting: issues and the error that carries them
//!
//! Copyright (c) 2026 Conforma Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// A single validation failure, anchored to a location in the input.
///
/// The path is a dotted/bracketed address from the validation root: empty at
/// the root, `field` for an object key, `field.nested` for nesting, and
/// `field[2]` for an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Where in the input the failure occurred
    pub path: String,
    /// Human-readable failure message
    pub message: String,
}

impl Issue {
    /// Create a new issue at the given path.
    pub fn new<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// The only failure type the engine raises.
///
/// Carries one or more issues; containers accumulate child issues into a
/// single error before it crosses their boundary, so one `parse` call
/// surfaces every problem in the input rather than just the first.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// All collected failures, in the order they were discovered
    pub issues: Vec<Issue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl ValidationError {
    /// Create an error carrying a single issue.
    pub fn single<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            issues: vec![Issue::new(path, message)],
        }
    }

    /// Create an error from a list of already-collected issues.
    ///
    /// The list must be non-empty; an error with zero issues is meaningless
    /// and the engine never constructs one.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty(), "ValidationError requires at least one issue");
        Self { issues }
    }

    /// Number of issues carried by this error.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Always false for errors built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Render the conventional rejection body consumed by HTTP collaborators:
    /// `{"error": "Validation failed", "issues": [{path, message}, ...]}`.
    pub fn to_json(&self) -> Value {
        json!({
            "error": "Validation failed",
            "issues": self.issues,
        })
    }
}

impl From<Issue> for ValidationError {
    fn from(issue: Issue) -> Self {
        Self { issues: vec![issue] }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
