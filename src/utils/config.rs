//! Configuration and constants for the pipeline.

/// Current dashboard data contract version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Default locations, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data/final";
pub const DEFAULT_OUTPUT_DIR: &str = "assets/data";

pub const FIXED_DATASET_FILE: &str = "FixedSalaryFinal.csv";
pub const FLEX_DATASET_FILE: &str = "FlexSalaryFinal.csv";

pub const DASHBOARD_FILE: &str = "dashboard-data.json";
pub const RECORDS_FILE: &str = "records-lite.json";

/// Number of equal-width salary histogram bins
pub const HISTOGRAM_BINS: usize = 30;
pub const MAX_HISTOGRAM_BINS: usize = 1000;

/// The company type view keeps only this many groups
pub const COMPANY_TYPE_LIMIT: usize = 30;

pub const P50: f64 = 0.5;
pub const P90: f64 = 0.9;

/// Columns every input dataset must carry
pub const REQUIRED_COLUMNS: &[&str] = &[
    "_id",
    "province",
    "city",
    "company",
    "companyType",
    "experience",
    "education",
    "salary_min",
    "salary_max",
    "salary_type",
];
