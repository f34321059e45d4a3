//! Schema validator for form payloads
//!
//! Validation semantics:
//! - Fields are visited in schema order
//! - Presence is checked first; a required field that is empty gets the
//!   required error and no other rule runs for it
//! - Type rules run only for values that are not absent, null, or ""
//! - Rules for one field run in a fixed order and a later failure replaces
//!   an earlier one (min before max, length before pattern)
//!
//! The validator is pure: no I/O, no clock, no shared state. It never
//! fails; a malformed payload simply produces field errors.

use serde_json::{Map, Value};

use super::coerce;
use super::result::{FieldError, ValidationResult};
use super::rules::{DateRules, NumberRules, SelectionRules, TextRules};
use super::types::{FieldKind, FormSchema};

/// Submitted values keyed by field name
pub type Payload = Map<String, Value>;

/// Validates `payload` against `schema`.
///
/// Returns an empty result when the payload is acceptable.
pub fn validate(schema: &FormSchema, payload: &Payload) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in &schema.fields {
        let value = payload.get(&field.name);

        if field.required && coerce::is_empty(value) {
            result.record(&field.name, FieldError::required());
            continue;
        }

        let Some(value) = value.filter(|v| !coerce::is_blank(Some(*v))) else {
            continue;
        };

        let outcome = match &field.kind {
            FieldKind::Text { validation } | FieldKind::Textarea { validation } => {
                check_text(validation, value)
            }
            FieldKind::Number { validation } => check_number(validation, value),
            FieldKind::MultiSelect { validation, .. } => check_selection(validation, value),
            FieldKind::Date { validation } => check_date(validation, value),
            FieldKind::Select { .. } | FieldKind::Switch => None,
        };

        if let Some(error) = outcome {
            result.record(&field.name, error);
        }
    }

    result
}

/// Validator bound to one schema.
///
/// Holds no state besides the schema reference and can be shared freely.
pub struct SchemaValidator<'a> {
    schema: &'a FormSchema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FormSchema {
        self.schema
    }

    /// Validates a payload map.
    pub fn validate(&self, payload: &Payload) -> ValidationResult {
        validate(self.schema, payload)
    }

    /// Validates an arbitrary JSON document.
    ///
    /// A document that is not an object has no field values, so every
    /// required field reports as missing.
    pub fn validate_document(&self, document: &Value) -> ValidationResult {
        match document.as_object() {
            Some(payload) => self.validate(payload),
            None => self.validate(&Payload::new()),
        }
    }
}

// Each check returns the last failing rule's error, mirroring
// record-and-overwrite within a single field.

/// Length in UTF-16 code units, the unit browser form controls count in.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn check_text(rules: &TextRules, value: &Value) -> Option<FieldError> {
    let text = coerce::string_form(value);
    let length = text_length(&text);
    let mut error = None;

    // A length bound of 0 is treated as unset.
    if let Some(min) = rules.min_length.filter(|n| *n > 0) {
        if length < min {
            error = Some(FieldError::too_short(min));
        }
    }
    if let Some(max) = rules.max_length.filter(|n| *n > 0) {
        if length > max {
            error = Some(FieldError::too_long(max));
        }
    }
    if let Some(pattern) = &rules.regex {
        if !pattern.is_match(&text) {
            error = Some(FieldError::invalid_format());
        }
    }

    error
}

fn check_number(rules: &NumberRules, value: &Value) -> Option<FieldError> {
    let Some(number) = coerce::to_number(value) else {
        return Some(FieldError::not_a_number());
    };
    let mut error = None;

    if let Some(min) = rules.min {
        if number < min {
            error = Some(FieldError::below_minimum(min));
        }
    }
    if let Some(max) = rules.max {
        if number > max {
            error = Some(FieldError::above_maximum(max));
        }
    }

    error
}

fn check_selection(rules: &SelectionRules, value: &Value) -> Option<FieldError> {
    let Some(selected) = value.as_array() else {
        return Some(FieldError::not_an_array());
    };
    let mut error = None;

    if let Some(min) = rules.min_selected {
        if selected.len() < min {
            error = Some(FieldError::too_few_selected(min));
        }
    }
    if let Some(max) = rules.max_selected {
        if selected.len() > max {
            error = Some(FieldError::too_many_selected(max));
        }
    }

    error
}

fn check_date(rules: &DateRules, value: &Value) -> Option<FieldError> {
    let Some(instant) = coerce::to_instant(value) else {
        return Some(FieldError::invalid_date());
    };

    match &rules.min_date {
        Some(bound) if instant < bound.instant() => Some(FieldError::before_min_date(bound)),
        _ => None,
    }
}
