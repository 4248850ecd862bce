//! Aggregation of job listings into dashboard views.
//!
//! This module transforms the unified dataset into:
//! - A whole-dataset summary
//! - Grouped views by province, experience, education, salary type
//!   and company type
//! - A fixed/flex salary histogram
//! - A five-dimensional drill-down cube

pub mod cube;
pub mod groups;
pub mod histogram;
pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use cube::build_cube;
pub use groups::{
    company_type_view, education_view, experience_view, province_view, salary_type_view,
};
pub use histogram::{bin_counts, bin_edges, build_histogram};
pub use summary::summarize;

use crate::output::schema::Dashboard;
use crate::parser::Dataset;
use crate::utils::config::{COMPANY_TYPE_LIMIT, HISTOGRAM_BINS};
use log::debug;

/// Tunables for the aggregation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Number of salary histogram bins
    pub histogram_bins: usize,

    /// Maximum rows in the company type view
    pub company_type_limit: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            histogram_bins: HISTOGRAM_BINS,
            company_type_limit: COMPANY_TYPE_LIMIT,
        }
    }
}

/// Compute every dashboard view from the unified dataset
///
/// **Public** - main entry point for aggregation
pub fn build_dashboard(dataset: &Dataset, options: &AggregateOptions) -> Dashboard {
    debug!("Aggregating {} rows", dataset.len());

    Dashboard {
        summary: summarize(dataset),
        province: province_view(dataset),
        experience: experience_view(dataset),
        education: education_view(dataset),
        salary_type: salary_type_view(dataset),
        company_type: company_type_view(dataset, options.company_type_limit),
        histogram: build_histogram(dataset, options.histogram_bins),
        cube: build_cube(dataset),
    }
}
