//! Row-level lean records for client-side filtering.

use super::schema::LiteRecord;
use crate::parser::{Dataset, JobRow};

/// Project one row onto the abbreviated record
pub fn to_lite_record(row: &JobRow) -> LiteRecord {
    LiteRecord {
        p: row.province.clone(),
        e: row.experience.clone(),
        ed: row.education.clone(),
        s: row.salary_mid,
        wm: row.work_mode,
        st: row.salary_type.clone(),
        ct: row.company_type.clone(),
    }
}

/// One lean record per dataset row, in dataset order
pub fn extract_lite_records(dataset: &Dataset) -> Vec<LiteRecord> {
    dataset.rows.iter().map(to_lite_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{derive_fields, RawJob, WorkMode};

    #[test]
    fn test_extract_preserves_order_and_fields() {
        let fixed = vec![derive_fields(
            RawJob {
                province: "Beijing".to_string(),
                experience: "1-3".to_string(),
                education: "Bachelor".to_string(),
                company_type: "Private".to_string(),
                salary_type: "monthly".to_string(),
                salary_min: Some(5000.0),
                salary_max: Some(7000.0),
                ..Default::default()
            },
            WorkMode::Fixed,
        )];
        let flex = vec![derive_fields(
            RawJob {
                province: "Hubei".to_string(),
                salary_min: Some(100.0),
                salary_max: Some(200.0),
                ..Default::default()
            },
            WorkMode::Flex,
        )];

        let records = extract_lite_records(&Dataset::concat(fixed, flex));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].p, "Beijing");
        assert_eq!(records[0].s, 6000.0);
        assert_eq!(records[0].ct, "Private");
        assert_eq!(records[1].wm, WorkMode::Flex);
        assert_eq!(records[1].s, 150.0);
    }
}
