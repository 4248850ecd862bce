//! Whole-dataset summary.

use super::stats::{distinct_count, max, mean, median, min, share};
use crate::output::schema::Summary;
use crate::parser::Dataset;

/// Compute the headline numbers for the dashboard
pub fn summarize(dataset: &Dataset) -> Summary {
    let rows = &dataset.rows;
    let mids: Vec<f64> = rows.iter().map(|r| r.salary_mid).collect();

    Summary {
        jobs: rows.len() as u64,
        provinces: distinct_count(rows.iter().map(|r| r.province.as_str())),
        cities: distinct_count(rows.iter().map(|r| r.city.as_str())),
        companies: distinct_count(rows.iter().map(|r| r.company.as_str())),
        company_types: distinct_count(rows.iter().map(|r| r.company_type.as_str())),
        salary_min: min(&mids),
        salary_max: max(&mids),
        salary_mean: mean(&mids),
        salary_median: median(&mids),
        flex_share: share(rows, |r| r.is_flex()),
    }
}

impl Summary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the `--summary` report
    pub fn describe(&self) -> String {
        format!(
            "Jobs: {} | Provinces: {} | Salary: {:.0}..{:.0} (mean {:.0}, median {:.0}) | Flex: {:.1}%",
            self.jobs,
            self.provinces,
            self.salary_min,
            self.salary_max,
            self.salary_mean,
            self.salary_median,
            self.flex_share * 100.0
        )
    }
}
