use crate::output::{read_dashboard, Dashboard};
use crate::utils::config::{COMPANY_TYPE_LIMIT, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a dashboard JSON file
///
/// `company_type_limit` is the cap the file was built with.
pub fn validate_dashboard_file(file_path: &Path, company_type_limit: usize) -> Result<()> {
    println!("Validating dashboard data: {}", file_path.display());

    let dashboard = read_dashboard(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let issues = check_consistency(&dashboard, company_type_limit);
    if !issues.is_empty() {
        for issue in &issues {
            println!("  ✗ {}", issue);
        }
        anyhow::bail!("Dashboard data failed {} consistency check(s)", issues.len());
    }

    println!("✓ Valid dashboard JSON");
    println!("  Jobs: {}", dashboard.summary.jobs);
    println!("  Provinces: {}", dashboard.province.len());
    println!("  Company Types: {}", dashboard.company_type.len());
    println!("  Histogram Bins: {}", dashboard.histogram.fixed.len());
    println!("  Cube Cells: {}", dashboard.cube.len());

    Ok(())
}

/// Cross-check the views of a dashboard document against each other
///
/// Returns one message per violated property, empty when consistent.
pub fn check_consistency(dashboard: &Dashboard, company_type_limit: usize) -> Vec<String> {
    let mut issues = Vec::new();
    let jobs = dashboard.summary.jobs;

    let province_total: u64 = dashboard.province.iter().map(|p| p.job_count).sum();
    if province_total != jobs {
        issues.push(format!(
            "province counts sum to {}, summary reports {} jobs",
            province_total, jobs
        ));
    }

    let cube_total: u64 = dashboard.cube.iter().map(|c| c.job_count).sum();
    if cube_total != jobs {
        issues.push(format!(
            "cube counts sum to {}, summary reports {} jobs",
            cube_total, jobs
        ));
    }

    let histogram = &dashboard.histogram;
    if histogram.fixed.len() != histogram.flex.len() {
        issues.push("histogram series have different lengths".to_string());
    }

    if !histogram.fixed.is_empty() && histogram.bins.len() != histogram.fixed.len() + 1 {
        issues.push(format!(
            "histogram has {} edges for {} bins",
            histogram.bins.len(),
            histogram.fixed.len()
        ));
    }

    // Rows without a finite salary are not binned
    let binned: u64 = histogram.fixed.iter().chain(&histogram.flex).sum();
    if binned > jobs {
        issues.push(format!(
            "histogram holds {} rows, summary reports {} jobs",
            binned, jobs
        ));
    }

    if dashboard.company_type.len() > company_type_limit {
        issues.push(format!(
            "company_type has {} entries (max {})",
            dashboard.company_type.len(),
            company_type_limit
        ));
    }

    issues
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Job Dashboard Data Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("dashboard-data.json:");
        println!("  summary: object          - jobs, provinces, cities, companies, company_types,");
        println!("                             salary_min/max/mean/median, flex_share");
        println!("  province: array          - province, job_count, salary_mean, salary_p90, flex_share");
        println!("  experience: array        - experience, job_count, salary_mean");
        println!("  education: array         - education, job_count, salary_mean");
        println!("  salary_type: array       - salary_type, work_mode, job_count, salary_mean");
        println!("  company_type: array      - companyType, job_count, salary_mean (top {})", COMPANY_TYPE_LIMIT);
        println!("  histogram: object        - bins (edges), fixed (counts), flex (counts)");
        println!("  cube: array              - province, experience, education, work_mode, salary_type,");
        println!("                             job_count, salary_mid_mean/p50/p90, salary_span_mean");
        println!();
        println!("records-lite.json (array):");
        println!("  p: string                - province");
        println!("  e: string                - experience");
        println!("  ed: string               - education");
        println!("  s: number                - salary midpoint");
        println!("  wm: string               - work mode (fixed | flex)");
        println!("  st: string               - salary type");
        println!("  ct: string               - company type");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Dashboard Data Builder v{}", env!("CARGO_PKG_VERSION"));
    println!("Data Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Precomputes job-listing aggregates for the salary dashboard.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{build_dashboard, AggregateOptions};
    use crate::parser::{derive_fields, Dataset, RawJob, WorkMode};

    fn sample_dashboard() -> Dashboard {
        let rows = [("Beijing", WorkMode::Fixed, 5000.0), ("Hubei", WorkMode::Flex, 9000.0)]
            .into_iter()
            .map(|(province, mode, salary)| {
                derive_fields(
                    RawJob {
                        province: province.to_string(),
                        salary_min: Some(salary),
                        salary_max: Some(salary),
                        ..Default::default()
                    },
                    mode,
                )
            })
            .collect();

        build_dashboard(&Dataset::new(rows), &AggregateOptions::default())
    }

    #[test]
    fn test_consistent_dashboard_has_no_issues() {
        assert!(check_consistency(&sample_dashboard(), COMPANY_TYPE_LIMIT).is_empty());
    }

    #[test]
    fn test_detects_province_mismatch() {
        let mut dashboard = sample_dashboard();
        dashboard.summary.jobs = 5;

        let issues = check_consistency(&dashboard, COMPANY_TYPE_LIMIT);

        assert!(issues.iter().any(|i| i.starts_with("province counts")));
    }

    #[test]
    fn test_company_type_cap_follows_build_limit() {
        let rows = (0..40)
            .map(|i| {
                derive_fields(
                    RawJob {
                        company_type: format!("type-{i:02}"),
                        salary_min: Some(1000.0),
                        salary_max: Some(2000.0),
                        ..Default::default()
                    },
                    WorkMode::Fixed,
                )
            })
            .collect();
        let options = AggregateOptions {
            company_type_limit: 40,
            ..Default::default()
        };

        let dashboard = build_dashboard(&Dataset::new(rows), &options);

        assert_eq!(dashboard.company_type.len(), 40);
        assert!(check_consistency(&dashboard, 40).is_empty());
        assert!(!check_consistency(&dashboard, COMPANY_TYPE_LIMIT).is_empty());
    }

    #[test]
    fn test_unbinned_rows_are_consistent() {
        let mut dashboard = sample_dashboard();
        let rows = vec![
            derive_fields(
                RawJob {
                    province: "Beijing".to_string(),
                    salary_min: Some(5000.0),
                    salary_max: Some(7000.0),
                    ..Default::default()
                },
                WorkMode::Fixed,
            ),
            derive_fields(
                RawJob {
                    province: "Hubei".to_string(),
                    salary_min: None,
                    salary_max: Some(7000.0),
                    ..Default::default()
                },
                WorkMode::Flex,
            ),
        ];
        let with_gap = build_dashboard(&Dataset::new(rows), &AggregateOptions::default());
        let binned: u64 = with_gap.histogram.fixed.iter().chain(&with_gap.histogram.flex).sum();

        assert_eq!(binned, 1);
        assert!(check_consistency(&with_gap, COMPANY_TYPE_LIMIT).is_empty());

        dashboard.histogram.fixed[0] += 5;
        assert!(!check_consistency(&dashboard, COMPANY_TYPE_LIMIT).is_empty());
    }

    #[test]
    fn test_detects_edge_mismatch() {
        let mut dashboard = sample_dashboard();
        dashboard.histogram.bins.pop();

        assert!(!check_consistency(&dashboard, COMPANY_TYPE_LIMIT).is_empty());
    }
}
