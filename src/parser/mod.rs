//! Dataset loading and row definitions.
//!
//! This module handles:
//! - Reading job-listing CSVs
//! - Validating the header once at load time
//! - Tagging rows with their work mode
//! - Deriving per-row salary fields

pub mod derive;
pub mod loader;
pub mod record;

// Re-export main types
pub use derive::derive_fields;
pub use loader::{load_dataset, read_rows};
pub use record::{Dataset, JobRow, RawJob, WorkMode};
