//! CSV dataset loader.
//!
//! Reads one job-listing CSV, checks its header once against
//! `REQUIRED_COLUMNS`, then deserializes every record into a `RawJob`
//! and derives the salary fields for it.

use super::derive::derive_fields;
use super::record::{JobRow, RawJob, WorkMode};
use crate::utils::config::REQUIRED_COLUMNS;
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a CSV dataset and tag every row with `work_mode`
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened
/// * `LoadError::MissingColumn` - header lacks a required column
/// * `LoadError::Csv` - malformed record or non-numeric salary
pub fn load_dataset(path: impl AsRef<Path>, work_mode: WorkMode) -> Result<Vec<JobRow>, LoadError> {
    let path = path.as_ref();

    debug!("Loading {} dataset from: {}", work_mode, path.display());

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_rows(BufReader::new(file), path, work_mode)?;

    info!("Loaded {} {} rows from {}", rows.len(), work_mode, path.display());

    Ok(rows)
}

/// Parse rows from any reader
///
/// **Public** - used by `load_dataset` and handy for in-memory input
///
/// `origin` only labels errors.
pub fn read_rows<R: Read>(
    reader: R,
    origin: &Path,
    work_mode: WorkMode,
) -> Result<Vec<JobRow>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    validate_headers(csv_reader.headers()?, origin)?;

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<RawJob>() {
        rows.push(derive_fields(record?, work_mode));
    }

    Ok(rows)
}

/// Check that every required column is present in the header
///
/// **Private** - internal validation
fn validate_headers(headers: &csv::StringRecord, origin: &Path) -> Result<(), LoadError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn {
                column: column.to_string(),
                path: origin.to_path_buf(),
            });
        }
    }

    Ok(())
}
