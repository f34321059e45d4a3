//! Submission storage subsystem
//!
//! Accepted submissions are kept in one JSON data file, newest first.
//!
//! # Design Principles
//!
//! - Only validated payloads are appended; the store does not validate
//! - Whole-document rewrite via temp file, fsync, rename
//! - Listing sorts and slices a copy; stored order is never changed
//! - The store is an owned handle passed explicitly to its users

mod errors;
mod query;
mod record;
mod store;

pub use errors::{StorageError, StorageResult};
pub use query::{
    paginate, ListQuery, PageRequest, SortKey, SortOrder, SubmissionPage, DEFAULT_LIMIT,
    DEFAULT_PAGE, MAX_LIMIT,
};
pub use record::{DataFile, SubmissionRecord};
pub use store::SubmissionStore;
