//! formbase - schema-driven form submission backend
//!
//! A declarative form schema drives validation of submitted payloads.
//! Accepted submissions are kept in a JSON data file, listed with
//! pagination and creation-time sorting, and exported as CSV.

pub mod cli;
pub mod export;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod storage;
