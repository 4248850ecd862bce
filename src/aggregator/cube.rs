//! Five-dimensional drill-down cube.
//!
//! One cell per observed (province, experience, education, work_mode,
//! salary_type) combination, in ascending key order. Statistics are
//! rounded to 2 decimals.

use super::groups::{group_rows, salary_mids};
use super::stats::{mean, quantile, round2};
use crate::output::schema::CubeCell;
use crate::parser::Dataset;
use crate::utils::config::{P50, P90};
use log::debug;

pub fn build_cube(dataset: &Dataset) -> Vec<CubeCell> {
    let groups = group_rows(dataset, |r| {
        (
            r.province.as_str(),
            r.experience.as_str(),
            r.education.as_str(),
            r.work_mode,
            r.salary_type.as_str(),
        )
    });

    let cube: Vec<CubeCell> = groups
        .into_iter()
        .map(|((province, experience, education, work_mode, salary_type), rows)| {
            let mids = salary_mids(&rows);
            let spans: Vec<f64> = rows.iter().map(|r| r.salary_span).collect();

            CubeCell {
                province: province.to_string(),
                experience: experience.to_string(),
                education: education.to_string(),
                work_mode,
                salary_type: salary_type.to_string(),
                job_count: rows.len() as u64,
                salary_mid_mean: round2(mean(&mids)),
                salary_mid_p50: round2(quantile(&mids, P50)),
                salary_mid_p90: round2(quantile(&mids, P90)),
                salary_span_mean: round2(mean(&spans)),
            }
        })
        .collect();

    debug!("Cube: {} cells", cube.len());
    cube
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{derive_fields, RawJob, WorkMode};

    fn row(province: &str, min: f64, max: f64, mode: WorkMode) -> crate::parser::JobRow {
        derive_fields(
            RawJob {
                province: province.to_string(),
                experience: "1-3".to_string(),
                education: "Bachelor".to_string(),
                salary_type: "monthly".to_string(),
                salary_min: Some(min),
                salary_max: Some(max),
                ..Default::default()
            },
            mode,
        )
    }

    #[test]
    fn test_cube_cells_in_key_order() {
        let dataset = Dataset::new(vec![
            row("Hubei", 1000.0, 2000.0, WorkMode::Flex),
            row("Beijing", 1000.0, 2000.0, WorkMode::Flex),
            row("Beijing", 1000.0, 2000.0, WorkMode::Fixed),
        ]);

        let cube = build_cube(&dataset);
        let keys: Vec<(&str, WorkMode)> =
            cube.iter().map(|c| (c.province.as_str(), c.work_mode)).collect();

        assert_eq!(
            keys,
            vec![
                ("Beijing", WorkMode::Fixed),
                ("Beijing", WorkMode::Flex),
                ("Hubei", WorkMode::Flex),
            ]
        );
    }

    #[test]
    fn test_cube_statistics_rounded() {
        let dataset = Dataset::new(vec![
            row("Beijing", 1000.0, 1000.0, WorkMode::Fixed),
            row("Beijing", 1000.0, 1001.0, WorkMode::Fixed),
            row("Beijing", 1000.0, 1003.0, WorkMode::Fixed),
        ]);

        let cube = build_cube(&dataset);
        let cell = &cube[0];

        // mids: 1000, 1000.5, 1001.5
        assert_eq!(cube.len(), 1);
        assert_eq!(cell.job_count, 3);
        assert_eq!(cell.salary_mid_mean, 1000.67);
        assert_eq!(cell.salary_mid_p50, 1000.5);
        // h = 1.8 -> 1000.5 + 0.8 * 1.0
        assert_eq!(cell.salary_mid_p90, 1001.3);
        assert_eq!(cell.salary_span_mean, 1.33);
    }
}
