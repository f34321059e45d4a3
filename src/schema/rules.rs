//! Type-specific constraint bundles
//!
//! Every bound is optional. Bundles reject unknown keys when deserialized,
//! and patterns and date bounds are parsed once at schema load time so a
//! loaded schema never fails during validation.

use std::fmt;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::coerce;

/// Constraints for text and textarea fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<Pattern>,
}

impl TextRules {
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.regex.is_none()
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_regex(mut self, pattern: Pattern) -> Self {
        self.regex = Some(pattern);
        self
    }
}

/// Inclusive bounds for number fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumberRules {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Inclusive lower bound for date fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DateRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<DateBound>,
}

impl DateRules {
    pub fn is_empty(&self) -> bool {
        self.min_date.is_none()
    }

    pub fn on_or_after(bound: DateBound) -> Self {
        Self {
            min_date: Some(bound),
        }
    }
}

/// Count bounds for multi-select fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectionRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selected: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<usize>,
}

impl SelectionRules {
    pub fn is_empty(&self) -> bool {
        self.min_selected.is_none() && self.max_selected.is_none()
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min_selected: Some(min),
            max_selected: Some(max),
        }
    }
}

/// A compiled text pattern, matched anywhere in the value.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source)
            .map_err(|e| de::Error::custom(format!("invalid regex '{}': {}", source, e)))
    }
}

/// A configured date bound: the text as written plus the instant it denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBound {
    raw: String,
    instant: DateTime<Utc>,
}

impl DateBound {
    /// Parses a bound using the same date grammar as payload values.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let instant = coerce::parse_date_str(&raw)?;
        Some(Self { raw, instant })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DateBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DateBound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateBound::parse(raw.clone())
            .ok_or_else(|| de::Error::custom(format!("invalid date bound '{}'", raw)))
    }
}
