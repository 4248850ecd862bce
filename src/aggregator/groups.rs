//! Grouped "by count" views of the dataset.
//!
//! Groups are collected in ascending key order, then stably sorted by
//! descending row count. Groups with equal counts therefore stay in key
//! order.

use super::stats::{mean, quantile, share};
use crate::output::schema::{
    CompanyTypeStats, EducationStats, ExperienceStats, ProvinceStats, SalaryTypeStats,
};
use crate::parser::{Dataset, JobRow};
use crate::utils::config::P90;
use log::debug;
use std::collections::BTreeMap;

/// Partition rows by key, keys in ascending order
///
/// **Public** - shared by the grouped views and the cube
pub fn group_rows<'a, K, F>(dataset: &'a Dataset, key: F) -> BTreeMap<K, Vec<&'a JobRow>>
where
    K: Ord,
    F: Fn(&'a JobRow) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a JobRow>> = BTreeMap::new();
    for row in &dataset.rows {
        groups.entry(key(row)).or_default().push(row);
    }
    groups
}

/// `salary_mid` of each row in a group
pub fn salary_mids(rows: &[&JobRow]) -> Vec<f64> {
    rows.iter().map(|r| r.salary_mid).collect()
}

/// Stable sort, largest count first
fn sort_by_count_desc<T>(items: &mut [T], count: impl Fn(&T) -> u64) {
    items.sort_by(|a, b| count(b).cmp(&count(a)));
}

/// Per-province count, mean, p90 and flex share
pub fn province_view(dataset: &Dataset) -> Vec<ProvinceStats> {
    let mut view: Vec<ProvinceStats> = group_rows(dataset, |r| r.province.as_str())
        .into_iter()
        .map(|(province, rows)| {
            let mids = salary_mids(&rows);
            ProvinceStats {
                province: province.to_string(),
                job_count: rows.len() as u64,
                salary_mean: mean(&mids),
                salary_p90: quantile(&mids, P90),
                flex_share: share(&rows, |r| r.is_flex()),
            }
        })
        .collect();

    sort_by_count_desc(&mut view, |s| s.job_count);
    debug!("Province view: {} groups", view.len());
    view
}

pub fn experience_view(dataset: &Dataset) -> Vec<ExperienceStats> {
    let mut view: Vec<ExperienceStats> = group_rows(dataset, |r| r.experience.as_str())
        .into_iter()
        .map(|(experience, rows)| ExperienceStats {
            experience: experience.to_string(),
            job_count: rows.len() as u64,
            salary_mean: mean(&salary_mids(&rows)),
        })
        .collect();

    sort_by_count_desc(&mut view, |s| s.job_count);
    view
}

pub fn education_view(dataset: &Dataset) -> Vec<EducationStats> {
    let mut view: Vec<EducationStats> = group_rows(dataset, |r| r.education.as_str())
        .into_iter()
        .map(|(education, rows)| EducationStats {
            education: education.to_string(),
            job_count: rows.len() as u64,
            salary_mean: mean(&salary_mids(&rows)),
        })
        .collect();

    sort_by_count_desc(&mut view, |s| s.job_count);
    view
}

/// Counts per (salary_type, work_mode) pair
pub fn salary_type_view(dataset: &Dataset) -> Vec<SalaryTypeStats> {
    let mut view: Vec<SalaryTypeStats> =
        group_rows(dataset, |r| (r.salary_type.as_str(), r.work_mode))
            .into_iter()
            .map(|((salary_type, work_mode), rows)| SalaryTypeStats {
                salary_type: salary_type.to_string(),
                work_mode,
                job_count: rows.len() as u64,
                salary_mean: mean(&salary_mids(&rows)),
            })
            .collect();

    sort_by_count_desc(&mut view, |s| s.job_count);
    view
}

/// The `limit` most common company types
pub fn company_type_view(dataset: &Dataset, limit: usize) -> Vec<CompanyTypeStats> {
    let mut view: Vec<CompanyTypeStats> = group_rows(dataset, |r| r.company_type.as_str())
        .into_iter()
        .map(|(company_type, rows)| CompanyTypeStats {
            company_type: company_type.to_string(),
            job_count: rows.len() as u64,
            salary_mean: mean(&salary_mids(&rows)),
        })
        .collect();

    sort_by_count_desc(&mut view, |s| s.job_count);

    if view.len() > limit {
        debug!("Truncating company types from {} to {}", view.len(), limit);
        view.truncate(limit);
    }
    view
}
