//! File record: one source file contributed to a brief.

use serde::{Deserialize, Serialize};

/// Metadata describing a project file included in the DNA brief.
/// Immutable input; fields pass through to the payload unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name as the caller wants it shown (e.g. "budget.xlsx")
    pub name: String,
    /// Date-like string, not parsed (e.g. "2025-12-01")
    pub date: String,
    /// Full file content; only an excerpt reaches the payload
    pub content: String,
}

impl FileRecord {
    /// Create a record from any string-ish parts.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            content: content.into(),
        }
    }
}
