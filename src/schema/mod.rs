//! Form schema subsystem
//!
//! Defines the declarative field schema and the single validation engine
//! every call site uses (HTTP submissions, the `validate` command, tests).
//!
//! # Design Principles
//!
//! - Closed set of field types, each with only its own constraints
//! - Schema fixed at startup and passed explicitly, never read from globals
//! - Presence checked first and short-circuits the field
//! - At most one error per field; later rules replace earlier ones
//! - Pure and deterministic validation

mod builtin;
pub mod coerce;
mod errors;
mod loader;
mod result;
mod rules;
mod types;
mod validator;

pub use builtin::employee_onboarding;
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use loader::SchemaLoader;
pub use result::{FieldError, ValidationResult, ViolationKind};
pub use rules::{DateBound, DateRules, NumberRules, Pattern, SelectionRules, TextRules};
pub use types::{FieldKind, FieldSpec, FormSchema};
pub use validator::{validate, Payload, SchemaValidator};
