//! Row types for job-listing datasets.
//!
//! `RawJob` mirrors the CSV columns by name. `JobRow` is a raw listing
//! tagged with its work mode and carrying the derived salary fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which source dataset a row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Fixed,
    Flex,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Fixed => "fixed",
            WorkMode::Flex => "flex",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One listing as read from CSV
///
/// Empty salary cells deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJob {
    #[serde(rename = "_id")]
    pub id: String,
    pub province: String,
    pub city: String,
    pub company: String,
    #[serde(rename = "companyType")]
    pub company_type: String,
    pub experience: String,
    pub education: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_type: String,
}

/// A listing with its work mode and derived salary fields
#[derive(Debug, Clone)]
pub struct JobRow {
    pub id: String,
    pub province: String,
    pub city: String,
    pub company: String,
    pub company_type: String,
    pub experience: String,
    pub education: String,
    pub salary_min: f64,
    pub salary_max: f64,
    pub salary_type: String,
    pub work_mode: WorkMode,

    /// Midpoint of the salary range
    pub salary_mid: f64,

    /// Width of the salary range (negative if the bounds are swapped)
    pub salary_span: f64,

    /// `salary_mid` in thousands
    pub salary_k: f64,
}

impl JobRow {
    pub fn is_flex(&self) -> bool {
        self.work_mode == WorkMode::Flex
    }
}

/// The unified dataset: fixed rows followed by flex rows
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<JobRow>,
}

impl Dataset {
    pub fn new(rows: Vec<JobRow>) -> Self {
        Self { rows }
    }

    /// Concatenate the two tagged sources into one dataset
    pub fn concat(fixed: Vec<JobRow>, flex: Vec<JobRow>) -> Self {
        let mut rows = fixed;
        rows.extend(flex);
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count_mode(&self, mode: WorkMode) -> usize {
        self.rows.iter().filter(|r| r.work_mode == mode).count()
    }

    /// `salary_mid` of every row in the given work mode
    pub fn salaries_for(&self, mode: WorkMode) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|r| r.work_mode == mode)
            .map(|r| r.salary_mid)
            .collect()
    }
}
