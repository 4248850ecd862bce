//! Summary statistics over salary values.
//!
//! All functions skip `NaN` inputs. An input with no finite values
//! yields `NaN`.

use std::collections::HashSet;

/// Non-NaN values, sorted ascending
fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

pub fn min(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

pub fn max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Quantile `q` in `[0, 1]`, linearly interpolated between order statistics
///
/// With `n` sorted values the position is `h = (n - 1) * q` and the
/// result is `x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])`.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    quantile_sorted(&sorted_finite(values), q)
}

fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let fraction = h - lo as f64;

    sorted[lo] + fraction * (sorted[hi] - sorted[lo])
}

/// Round to 2 decimals, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Fraction of items matching a predicate, `NaN` when there are none
pub fn share<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> f64 {
    if items.is_empty() {
        return f64::NAN;
    }
    items.iter().filter(|item| predicate(*item)).count() as f64 / items.len() as f64
}

/// Number of distinct non-empty strings
pub fn distinct_count<'a>(values: impl IntoIterator<Item = &'a str>) -> u64 {
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len() as u64
}
