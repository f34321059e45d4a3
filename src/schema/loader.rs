//! Schema loading
//!
//! The form schema is fixed at startup: either the built-in onboarding
//! schema or one JSON document read from disk. A loaded schema has passed
//! both deserialization (closed field types, compiled patterns, parsed
//! date bounds) and the structure check.

use std::fs;
use std::path::Path;

use super::builtin;
use super::errors::{SchemaError, SchemaResult};
use super::types::FormSchema;

/// Reads form schemas from JSON.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Loads a schema file.
    pub fn load_file(path: &Path) -> SchemaResult<FormSchema> {
        let source = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| SchemaError::unreadable(&source, e))?;

        Self::parse(&source, &content)
    }

    /// Parses a schema from a JSON string.
    pub fn from_json(content: &str) -> SchemaResult<FormSchema> {
        Self::parse("<in-memory>", content)
    }

    /// Loads `path` when given, otherwise returns the built-in schema.
    pub fn load_or_builtin(path: Option<&Path>) -> SchemaResult<FormSchema> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(builtin::employee_onboarding()),
        }
    }

    fn parse(source: &str, content: &str) -> SchemaResult<FormSchema> {
        let schema: FormSchema =
            serde_json::from_str(content).map_err(|e| SchemaError::malformed(source, e))?;

        schema
            .validate_structure()
            .map_err(|e| SchemaError::invalid(source, e))?;

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::errors::SchemaErrorCode;
    use tempfile::TempDir;

    const CONTACT_SCHEMA: &str = r#"{
        "title": "Contact",
        "description": "Reach out",
        "fields": [
            { "name": "email", "label": "Email", "type": "text", "required": true,
              "validation": { "regex": "^[^@]+@[^@]+$" } },
            { "name": "topic", "label": "Topic", "type": "select",
              "options": ["Sales", "Support"] }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let schema = SchemaLoader::from_json(CONTACT_SCHEMA).unwrap();
        assert_eq!(schema.title, "Contact");
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.field("email").unwrap().required);
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contact.json");
        fs::write(&path, CONTACT_SCHEMA).unwrap();

        let schema = SchemaLoader::load_file(&path).unwrap();
        assert_eq!(schema.field("topic").unwrap().kind.type_name(), "select");
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let err = SchemaLoader::load_file(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::FormSchemaUnreadable);
    }

    #[test]
    fn test_bad_regex_is_malformed() {
        let err = SchemaLoader::from_json(
            r#"{ "title": "T", "fields": [
                { "name": "a", "label": "A", "type": "text", "validation": { "regex": "(" } }
            ] }"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::FormSchemaMalformed);
    }

    #[test]
    fn test_duplicate_names_are_invalid() {
        let err = SchemaLoader::from_json(
            r#"{ "title": "T", "fields": [
                { "name": "a", "label": "A", "type": "switch" },
                { "name": "a", "label": "B", "type": "switch" }
            ] }"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::FormSchemaInvalid);
    }

    #[test]
    fn test_builtin_when_no_path() {
        let schema = SchemaLoader::load_or_builtin(None).unwrap();
        assert_eq!(schema.title, "Employee Onboarding");
    }
}
