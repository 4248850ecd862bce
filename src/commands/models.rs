use crate::aggregator::AggregateOptions;
use crate::utils::config::{
    DASHBOARD_FILE, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR, FIXED_DATASET_FILE, FLEX_DATASET_FILE,
    RECORDS_FILE,
};
use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Directory holding the input CSVs
    pub data_dir: PathBuf,

    /// Directory receiving the JSON artifacts
    pub output_dir: PathBuf,

    /// File name of the fixed-salary dataset inside `data_dir`
    pub fixed_file: String,

    /// File name of the flexible-work dataset inside `data_dir`
    pub flex_file: String,

    /// Aggregation tunables
    pub options: AggregateOptions,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fixed_file: FIXED_DATASET_FILE.to_string(),
            flex_file: FLEX_DATASET_FILE.to_string(),
            options: AggregateOptions::default(),
            print_summary: false,
        }
    }
}

impl BuildArgs {
    pub fn fixed_path(&self) -> PathBuf {
        self.data_dir.join(&self.fixed_file)
    }

    pub fn flex_path(&self) -> PathBuf {
        self.data_dir.join(&self.flex_file)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir.join(DASHBOARD_FILE)
    }

    pub fn records_path(&self) -> PathBuf {
        self.output_dir.join(RECORDS_FILE)
    }
}
