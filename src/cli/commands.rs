//! CLI command implementations
//!
//! Each command loads the config, resolves the schema, and (when it needs
//! submissions) opens the data file before doing its one job.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::export::to_csv;
use crate::http_server::{AppState, HttpServer};
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{FormSchema, SchemaLoader, SchemaValidator};
use crate::storage::{ListQuery, SubmissionStore};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response, write_text};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Init { config } => init(&config),
        Command::Schema { config } => schema(&config),
        Command::Validate { config } => validate(&config),
        Command::List {
            config,
            page,
            limit,
            sort_order,
        } => list(
            &config,
            ListQuery {
                page,
                limit,
                sort_by: None,
                sort_order,
            },
        ),
        Command::Export {
            config,
            page,
            limit,
            sort_order,
            output,
        } => export(
            &config,
            ListQuery {
                page,
                limit,
                sort_by: None,
                sort_order,
            },
            output.as_deref(),
        ),
    }
}

fn load_schema(config: &Config) -> CliResult<FormSchema> {
    Ok(SchemaLoader::load_or_builtin(config.schema_file.as_deref())?)
}

fn open_store(config: &Config, schema: &FormSchema) -> CliResult<SubmissionStore> {
    Ok(SubmissionStore::open(&config.data_file, schema)?)
}

/// Start the HTTP API
///
/// Startup order: config, schema, data file, listener. Any failure is
/// logged as `STARTUP_FAILED` and ends the process.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let result = boot_and_serve(config_path);
    if let Err(e) = &result {
        log_event_with_fields(
            Event::StartupFailed,
            &[("code", e.code_str()), ("reason", e.message())],
        );
    }
    result
}

fn boot_and_serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let config_source = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", &config_source)]);

    let schema = load_schema(&config)?;
    let field_count = schema.fields.len().to_string();
    log_event_with_fields(
        Event::SchemaLoaded,
        &[("fields", &field_count), ("title", &schema.title)],
    );

    let store = open_store(&config, &schema)?;
    let data_path = store.path().display().to_string();
    let stored = store.len().to_string();
    log_event_with_fields(
        Event::StoreOpened,
        &[("path", &data_path), ("submissions", &stored)],
    );

    let state = Arc::new(AppState::new(schema, store));
    let server = HttpServer::with_state(config.http.clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Write a default config (when missing) and create the data file
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = init_config(config_path)?;
    let data_display = config.data_file.display().to_string();

    if config.data_file.exists() {
        return Err(CliError::already_initialized(&data_display));
    }

    let config_written = if config_path.exists() {
        false
    } else {
        config.write(config_path)?;
        true
    };

    let schema = load_schema(&config)?;
    open_store(&config, &schema)?;

    write_response(json!({
        "initialized": true,
        "data_file": data_display,
        "config_written": config_written,
    }))
}

/// The config `init` saves: file values only, without the `PORT` override.
fn init_config(config_path: &Path) -> CliResult<Config> {
    Config::load_file(config_path)
}

/// Print the active form schema
pub fn schema(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let schema = load_schema(&config)?;
    write_response(serde_json::to_value(&schema)?)
}

/// Validate a payload from stdin without storing it
pub fn validate(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let schema = load_schema(&config)?;
    let document = read_request()?;

    write_response(validation_report(&schema, &document))
}

fn validation_report(schema: &FormSchema, document: &Value) -> Value {
    let result = SchemaValidator::new(schema).validate_document(document);
    json!({
        "valid": result.is_valid(),
        "errors": result,
    })
}

/// Print one page of stored submissions
pub fn list(config_path: &Path, query: ListQuery) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let schema = load_schema(&config)?;
    let store = open_store(&config, &schema)?;

    let page = store.list(&query.normalize());
    write_response(serde_json::to_value(&page)?)
}

/// Export one page of submissions as CSV to a file or stdout
pub fn export(config_path: &Path, query: ListQuery, output: Option<&Path>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let schema = load_schema(&config)?;
    let store = open_store(&config, &schema)?;

    let page = store.list(&query.normalize());
    let csv = to_csv(&page.items)?;

    match output {
        Some(path) => {
            fs::write(path, &csv).map_err(|e| {
                CliError::io_error(format!("Failed to write {}: {}", path.display(), e))
            })?;
            write_response(json!({
                "rows": page.items.len(),
                "output": path.display().to_string(),
            }))
        }
        None => write_text(&csv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliErrorCode, PORT_ENV};
    use crate::schema::employee_onboarding;
    use tempfile::TempDir;

    #[test]
    fn test_validation_report_invalid() {
        let schema = employee_onboarding();
        let report = validation_report(&schema, &json!({ "firstName": "J" }));

        assert_eq!(report["valid"], false);
        assert_eq!(report["errors"]["firstName"], "Minimum length is 2");
        assert_eq!(report["errors"]["age"], "This field is required.");
    }

    #[test]
    fn test_validation_report_non_object() {
        let schema = employee_onboarding();
        let report = validation_report(&schema, &json!([1, 2, 3]));

        assert_eq!(report["valid"], false);
        assert_eq!(report["errors"]["role"], "This field is required.");
    }

    #[test]
    fn test_open_store_creates_data_file() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_file: dir.path().join("db.json"),
            ..Config::default()
        };
        let schema = load_schema(&config).unwrap();

        let store = open_store(&config, &schema).unwrap();
        assert!(store.is_empty());
        assert!(config.data_file.exists());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("formbase.json");
        let output = dir.path().join("out.csv");
        let config = Config {
            data_file: dir.path().join("db.json"),
            ..Config::default()
        };
        config.write(&config_path).unwrap();

        export(&config_path, ListQuery::default(), Some(&output)).unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        assert_eq!(csv, "ID,Created At,Data");
    }

    #[test]
    fn test_init_refuses_existing_data_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("formbase.json");
        let config = Config {
            data_file: dir.path().join("db.json"),
            ..Config::default()
        };
        config.write(&config_path).unwrap();
        fs::write(&config.data_file, "").unwrap();

        let err = init(&config_path).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::AlreadyInitialized);
    }

    #[test]
    fn test_init_config_ignores_port_override() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("formbase.json");
        std::env::set_var(PORT_ENV, "6553");

        let config = init_config(&config_path).unwrap();
        assert_eq!(config.http.port, 4000);

        fs::write(&config_path, r#"{ "http": { "port": 5000 } }"#).unwrap();
        let config = init_config(&config_path).unwrap();
        assert_eq!(config.http.port, 5000);
    }
}
