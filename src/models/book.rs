//! Book record model and related types.
//!
//! The wire format is camelCase JSON; timestamps are ISO-8601 via chrono.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A book record held in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Server-generated opaque unique id
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Derived: `read_page == page_count`, never client-set
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Reduced view of the record for list responses
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Client-supplied fields for create and update requests.
///
/// `id`, `finished` and the timestamps are server-owned; any such keys in the
/// payload are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: Option<bool>,
}

/// The `{id, name, publisher}` projection returned by list operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Query parameters accepted by the list endpoint.
///
/// Filters apply with precedence name > reading > finished; the first
/// non-empty parameter wins and the others are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Case-insensitive substring match against the book name
    pub name: Option<String>,
    /// Boolean-like value ("0"/"1"/"false"/"true") matched against `reading`
    pub reading: Option<String>,
    /// Boolean-like value matched against `finished`
    pub finished: Option<String>,
}

impl BookQuery {
    /// Treat empty strings as absent, mirroring query-string semantics
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn reading_filter(&self) -> Option<&str> {
        self.reading.as_deref().filter(|s| !s.is_empty())
    }

    pub fn finished_filter(&self) -> Option<&str> {
        self.finished.as_deref().filter(|s| !s.is_empty())
    }
}

/// Coerce a boolean-like query value. `None` when the value is neither
/// numeric nor a boolean literal; such filters match nothing.
pub fn coerce_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "TRUE" | "True" => Some(true),
        "false" | "FALSE" | "False" => Some(false),
        _ => value.parse::<i64>().ok().map(|n| n != 0),
    }
}
