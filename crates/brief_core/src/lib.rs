//! brief_core — shared types and payload assembly (no transport deps).

pub mod payload;
pub mod record;

pub use payload::{build_payload, EXCERPT_LIMIT};
pub use record::FileRecord;
