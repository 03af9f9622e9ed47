//! Field-level validation shared by the exercise and workout schemas.
//!
//! Validators never stop at the first problem: every check appends to a
//! [`Violations`] list, so callers get the complete set in one pass, in the
//! order fields are declared and sequences are encountered.

pub mod exercise;
pub mod workout;

use std::fmt;

use serde::{Serialize, Serializer};

pub use exercise::validate_exercise;
pub use workout::validate_workout;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

/// Location of a value inside a record, e.g. `exerciseLogs[2].sets[0].weight`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &'static str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Field(name));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Whether `self` is `other` or nested somewhere below it.
    pub fn starts_with(&self, other: &FieldPath) -> bool {
        self.0.starts_with(&other.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: FieldPath,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Accumulator for violations found during one validation pass.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: FieldPath, message: impl Into<String>) {
        self.0.push(FieldViolation {
            path,
            message: message.into(),
        });
    }

    /// Whether `path` is already covered by a violation reported at it or at
    /// one of its ancestors.
    pub fn covers(&self, path: &FieldPath) -> bool {
        self.0.iter().any(|v| path.starts_with(&v.path))
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = FieldViolation>) {
        self.0.extend(other);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }
}

/// Check a required text field against an inclusive character-count range.
///
/// Only an absent or empty string counts as missing; whitespace is text.
pub(crate) fn check_text(
    violations: &mut Violations,
    path: FieldPath,
    label: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    match value {
        None | Some("") => violations.push(path, format!("{} is required", label)),
        Some(s) => {
            let len = s.chars().count();
            if len < min || len > max {
                violations.push(
                    path,
                    format!(
                        "{} must be between {} and {} characters (got {})",
                        label, min, max, len
                    ),
                );
            }
        }
    }
}
