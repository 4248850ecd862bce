//! Dashboard data contract and JSON writers.
//!
//! This module handles:
//! - The output schema of both artifacts
//! - Projecting rows to lean records
//! - Writing ASCII-only JSON atomically

pub mod json;
pub mod lite;
pub mod schema;

// Re-export main functions
pub use json::{
    read_dashboard, read_records, render_dashboard, render_records, write_atomic,
    write_dashboard, write_records,
};
pub use lite::extract_lite_records;
pub use schema::{Dashboard, LiteRecord};
