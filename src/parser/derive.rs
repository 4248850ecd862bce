//! Per-row derived salary fields.

use super::record::{JobRow, RawJob, WorkMode};

/// Tag a raw listing with its work mode and compute the derived fields
///
/// A missing bound propagates as `NaN` through every derived field.
/// Swapped bounds are not rejected.
pub fn derive_fields(raw: RawJob, work_mode: WorkMode) -> JobRow {
    let salary_min = raw.salary_min.unwrap_or(f64::NAN);
    let salary_max = raw.salary_max.unwrap_or(f64::NAN);

    let salary_mid = (salary_min + salary_max) / 2.0;
    let salary_span = salary_max - salary_min;
    let salary_k = salary_mid / 1000.0;

    JobRow {
        id: raw.id,
        province: raw.province,
        city: raw.city,
        company: raw.company,
        company_type: raw.company_type,
        experience: raw.experience,
        education: raw.education,
        salary_min,
        salary_max,
        salary_type: raw.salary_type,
        work_mode,
        salary_mid,
        salary_span,
        salary_k,
    }
}
