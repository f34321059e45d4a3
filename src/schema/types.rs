//! Form schema type definitions
//!
//! Supported field types:
//! - text / textarea: free text with optional length and pattern rules
//! - number: numeric input with optional inclusive bounds
//! - date: calendar date with optional lower bound
//! - select: single choice from `options`
//! - multi-select: several choices from `options` with count bounds
//! - switch: boolean toggle
//!
//! Each kind carries only the constraints that apply to it, so a schema
//! such as `minSelected` on a text field cannot be expressed.

use serde::{Deserialize, Serialize};

use super::rules::{DateRules, NumberRules, SelectionRules, TextRules};

/// Field type together with its type-specific constraints.
///
/// Serialized with the JSON `type` key as the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text
    Text {
        #[serde(default, skip_serializing_if = "TextRules::is_empty")]
        validation: TextRules,
    },
    /// Multi-line text
    Textarea {
        #[serde(default, skip_serializing_if = "TextRules::is_empty")]
        validation: TextRules,
    },
    /// Numeric input
    Number {
        #[serde(default, skip_serializing_if = "NumberRules::is_empty")]
        validation: NumberRules,
    },
    /// Calendar date
    Date {
        #[serde(default, skip_serializing_if = "DateRules::is_empty")]
        validation: DateRules,
    },
    /// Single choice
    Select {
        #[serde(default)]
        options: Vec<String>,
    },
    /// Multiple choices
    MultiSelect {
        #[serde(default)]
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "SelectionRules::is_empty")]
        validation: SelectionRules,
    },
    /// Boolean toggle
    Switch,
}

impl FieldKind {
    /// Returns the wire name of the type
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Number { .. } => "number",
            FieldKind::Date { .. } => "date",
            FieldKind::Select { .. } => "select",
            FieldKind::MultiSelect { .. } => "multi-select",
            FieldKind::Switch => "switch",
        }
    }

    /// Returns the allowed options for choice fields
    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Select { options } | FieldKind::MultiSelect { options, .. } => {
                Some(options)
            }
            _ => None,
        }
    }

    pub fn text(validation: TextRules) -> Self {
        FieldKind::Text { validation }
    }

    pub fn textarea(validation: TextRules) -> Self {
        FieldKind::Textarea { validation }
    }

    pub fn number(validation: NumberRules) -> Self {
        FieldKind::Number { validation }
    }

    pub fn date(validation: DateRules) -> Self {
        FieldKind::Date { validation }
    }

    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::Select {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn multi_select<I, S>(options: I, validation: SelectionRules) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::MultiSelect {
            options: options.into_iter().map(Into::into).collect(),
            validation,
        }
    }
}

/// One named input slot of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key into the payload and the error map
    pub name: String,
    /// Display text, passed through unmodified
    pub label: String,
    /// Display hint, passed through unmodified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether the field must be non-empty
    #[serde(default)]
    pub required: bool,
    /// Type and type-specific constraints
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create an optional field
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: None,
            required: false,
            kind,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Complete form definition. Field order is display and validation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Create a new schema
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields,
        }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates the schema structure itself (not a payload)
    pub fn validate_structure(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();

        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err("Field names must not be empty".into());
            }

            if !seen.insert(field.name.as_str()) {
                return Err(format!("Duplicate field name '{}'", field.name));
            }

            if let Some(options) = field.kind.options() {
                if options.is_empty() {
                    return Err(format!(
                        "Field '{}' of type {} must declare options",
                        field.name,
                        field.kind.type_name()
                    ));
                }
            }
        }

        Ok(())
    }
}
