//! Listing submissions: pagination and sorting
//!
//! Query parameters arrive as loose text. They are normalized into a
//! `PageRequest` before use:
//! - page: leading integer, values below 1 become 1
//! - limit: leading integer, values below 1 become 10, capped at 100
//! - sortBy: only `createdAt` sorts; any other key keeps stored order
//! - sortOrder: `asc` for oldest first, anything else newest first

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::record::SubmissionRecord;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Raw list parameters as received
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

impl ListQuery {
    /// Normalizes the raw parameters.
    pub fn normalize(&self) -> PageRequest {
        let page = self
            .page
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n >= 1)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_PAGE);

        let limit = self
            .limit
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n >= 1)
            .map(|n| (n as usize).min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT);

        let sort_by = match self.sort_by.as_deref() {
            None | Some("createdAt") => SortKey::CreatedAt,
            Some(_) => SortKey::Stored,
        };

        let sort_order = match self.sort_order.as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };

        PageRequest {
            page,
            limit,
            sort_by,
            sort_order,
        }
    }
}

/// Sort key for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Creation timestamp
    CreatedAt,
    /// Stored order (newest first)
    Stored,
}

/// Sort direction for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Normalized list parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        ListQuery::default().normalize()
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize, sort_order: SortOrder) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
            sort_by: SortKey::CreatedAt,
            sort_order,
        }
    }
}

/// One page of submissions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPage {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: Vec<SubmissionRecord>,
}

/// Sorts a copy of `records` and slices out the requested page.
///
/// Pages past the end are empty; `total_pages` is never below 1.
pub fn paginate(records: &[SubmissionRecord], request: &PageRequest) -> SubmissionPage {
    let mut items: Vec<&SubmissionRecord> = records.iter().collect();

    if request.sort_by == SortKey::CreatedAt {
        items.sort_by(|a, b| {
            let ordering = compare_created_at(a, b);
            match request.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let total = items.len();
    let total_pages = total.div_ceil(request.limit).max(1);
    let start = (request.page - 1).saturating_mul(request.limit);

    SubmissionPage {
        page: request.page,
        limit: request.limit,
        total,
        total_pages,
        items: items
            .into_iter()
            .skip(start)
            .take(request.limit)
            .cloned()
            .collect(),
    }
}

fn compare_created_at(a: &SubmissionRecord, b: &SubmissionRecord) -> Ordering {
    a.created_at_instant().cmp(&b.created_at_instant())
}

/// Parses a leading base-10 integer the way form query strings are read:
/// leading whitespace skipped, optional sign, then digits up to the first
/// non-digit.
fn parse_leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (negative, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
