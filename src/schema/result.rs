//! Validation outcome types
//!
//! Violation kinds:
//! - FORM_FIELD_REQUIRED: required field empty
//! - FORM_FIELD_FORMAT: value does not coerce to a number or date
//! - FORM_FIELD_RANGE: numeric or date bound violated
//! - FORM_FIELD_LENGTH: text length bound violated
//! - FORM_FIELD_CARDINALITY: selection count bound violated
//! - FORM_FIELD_SHAPE: multi-select value is not an array
//! - FORM_FIELD_PATTERN: text does not match the configured pattern
//!
//! All of them are recoverable by the submitter.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::rules::DateBound;

/// Category of a failed field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    Presence,
    Format,
    Range,
    Length,
    Cardinality,
    Shape,
    Pattern,
}

impl ViolationKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Presence => "FORM_FIELD_REQUIRED",
            ViolationKind::Format => "FORM_FIELD_FORMAT",
            ViolationKind::Range => "FORM_FIELD_RANGE",
            ViolationKind::Length => "FORM_FIELD_LENGTH",
            ViolationKind::Cardinality => "FORM_FIELD_CARDINALITY",
            ViolationKind::Shape => "FORM_FIELD_SHAPE",
            ViolationKind::Pattern => "FORM_FIELD_PATTERN",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single field failure with its human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    kind: ViolationKind,
    message: String,
}

impl FieldError {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required() -> Self {
        Self::new(ViolationKind::Presence, "This field is required.")
    }

    pub fn too_short(min: usize) -> Self {
        Self::new(ViolationKind::Length, format!("Minimum length is {}", min))
    }

    pub fn too_long(max: usize) -> Self {
        Self::new(ViolationKind::Length, format!("Maximum length is {}", max))
    }

    pub fn invalid_format() -> Self {
        Self::new(ViolationKind::Pattern, "Invalid format.")
    }

    pub fn not_a_number() -> Self {
        Self::new(ViolationKind::Format, "Must be a number.")
    }

    pub fn below_minimum(min: f64) -> Self {
        Self::new(ViolationKind::Range, format!("Minimum value is {}", min))
    }

    pub fn above_maximum(max: f64) -> Self {
        Self::new(ViolationKind::Range, format!("Maximum value is {}", max))
    }

    pub fn not_an_array() -> Self {
        Self::new(ViolationKind::Shape, "Must be an array.")
    }

    pub fn too_few_selected(min: usize) -> Self {
        Self::new(
            ViolationKind::Cardinality,
            format!("Select at least {} items.", min),
        )
    }

    pub fn too_many_selected(max: usize) -> Self {
        Self::new(
            ViolationKind::Cardinality,
            format!("Select at most {} items.", max),
        )
    }

    pub fn invalid_date() -> Self {
        Self::new(ViolationKind::Format, "Invalid date.")
    }

    pub fn before_min_date(bound: &DateBound) -> Self {
        Self::new(
            ViolationKind::Range,
            format!("Date must be on/after {}", bound),
        )
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Field-keyed error map produced by one validation pass.
///
/// An empty result means the payload was accepted. Each field appears at
/// most once; recording a field again replaces its previous error.
/// Serializes as `{ "<field>": "<message>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<String, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field`, replacing any earlier error for it
    pub fn record(&mut self, field: &str, error: FieldError) {
        self.errors.insert(field.to_string(), error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).map(FieldError::message)
    }

    pub fn kind(&self, field: &str) -> Option<ViolationKind> {
        self.get(field).map(FieldError::kind)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field name to message, the shape surfaced to submitters
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(k, v)| (k.clone(), v.message.clone()))
            .collect()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field, error.message())?;
        }
        map.end()
    }
}
