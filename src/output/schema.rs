//! Output JSON schema definitions for dashboard data.
//!
//! Field order on each struct is the key order written to disk.
//! Non-finite statistics serialize as `null` and read back as `NaN`.

use crate::parser::WorkMode;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level `dashboard-data.json` document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub province: Vec<ProvinceStats>,
    pub experience: Vec<ExperienceStats>,
    pub education: Vec<EducationStats>,
    pub salary_type: Vec<SalaryTypeStats>,
    pub company_type: Vec<CompanyTypeStats>,
    pub histogram: Histogram,
    pub cube: Vec<CubeCell>,
}

/// Whole-dataset statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Total number of rows
    pub jobs: u64,

    /// Distinct non-empty values per attribute
    pub provinces: u64,
    pub cities: u64,
    pub companies: u64,
    pub company_types: u64,

    /// Statistics of `salary_mid`
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_min: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_max: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mean: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_median: f64,

    /// Fraction of rows tagged `flex`
    #[serde(deserialize_with = "nullable_f64")]
    pub flex_share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceStats {
    pub province: String,
    pub job_count: u64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mean: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_p90: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub flex_share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceStats {
    pub experience: String,
    pub job_count: u64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationStats {
    pub education: String,
    pub job_count: u64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryTypeStats {
    pub salary_type: String,
    pub work_mode: WorkMode,
    pub job_count: u64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyTypeStats {
    #[serde(rename = "companyType")]
    pub company_type: String,
    pub job_count: u64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mean: f64,
}

/// Salary histogram with shared bin edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins
    pub bins: Vec<f64>,
    pub fixed: Vec<u64>,
    pub flex: Vec<u64>,
}

/// One cell of the drill-down cube
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeCell {
    pub province: String,
    pub experience: String,
    pub education: String,
    pub work_mode: WorkMode,
    pub salary_type: String,
    pub job_count: u64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mid_mean: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mid_p50: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_mid_p90: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub salary_span_mean: f64,
}

/// One row of `records-lite.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteRecord {
    /// province
    pub p: String,
    /// experience
    pub e: String,
    /// education
    pub ed: String,
    /// salary_mid
    #[serde(deserialize_with = "nullable_f64")]
    pub s: f64,
    /// work_mode
    pub wm: WorkMode,
    /// salary_type
    pub st: String,
    /// companyType
    pub ct: String,
}

/// `null` reads back as `NaN`
fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_type_key_is_camel_case() {
        let stats = CompanyTypeStats {
            company_type: "Private".to_string(),
            job_count: 3,
            salary_mean: 1.5,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"companyType":"Private","job_count":3,"salary_mean":1.5}"#);
    }

    #[test]
    fn test_null_reads_back_as_nan() {
        let json = r#"{"experience":"none","job_count":1,"salary_mean":null}"#;
        let stats: ExperienceStats = serde_json::from_str(json).unwrap();
        assert!(stats.salary_mean.is_nan());
    }
}
