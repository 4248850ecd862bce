//! Salary histogram with shared bin edges.
//!
//! Edges span the combined `salary_mid` range. Fixed and flex rows are
//! counted separately against the same edges so the two series can be
//! drawn on one axis.

use super::stats::{max, min};
use crate::output::schema::Histogram;
use crate::parser::{Dataset, WorkMode};
use log::debug;

/// `bins + 1` evenly spaced edges from `start` to `stop`, both inclusive
pub fn bin_edges(start: f64, stop: f64, bins: usize) -> Vec<f64> {
    if bins == 0 {
        return Vec::new();
    }

    let step = (stop - start) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| start + i as f64 * step).collect();
    edges.push(stop);
    edges
}

/// Count values into the bins described by `edges`
///
/// Bins are half-open except the last, which also holds values equal to
/// the final edge. `NaN` and out-of-range values are not counted. When
/// all edges coincide every value lands in the last bin.
pub fn bin_counts(values: &[f64], edges: &[f64]) -> Vec<u64> {
    if edges.len() < 2 {
        return Vec::new();
    }

    let bins = edges.len() - 1;
    let first = edges[0];
    let last = edges[bins];
    let mut counts = vec![0u64; bins];

    for &value in values {
        if value.is_nan() || value < first || value > last {
            continue;
        }

        if last == first {
            counts[bins - 1] += 1;
            continue;
        }

        let mut index = (((value - first) / (last - first)) * bins as f64) as usize;
        index = index.min(bins - 1);

        // Float error in the scaled index can be off by one near an edge
        if index > 0 && value < edges[index] {
            index -= 1;
        } else if index + 1 < bins && value >= edges[index + 1] {
            index += 1;
        }

        counts[index] += 1;
    }

    counts
}

/// Build the fixed/flex histogram over the whole dataset
pub fn build_histogram(dataset: &Dataset, bins: usize) -> Histogram {
    let all: Vec<f64> = dataset.rows.iter().map(|r| r.salary_mid).collect();
    let (low, high) = (min(&all), max(&all));

    if low.is_nan() {
        debug!("No finite salaries, histogram is empty");
        return Histogram {
            bins: Vec::new(),
            fixed: Vec::new(),
            flex: Vec::new(),
        };
    }

    let edges = bin_edges(low, high, bins);
    debug!("Histogram: {} bins over [{}, {}]", bins, low, high);

    Histogram {
        fixed: bin_counts(&dataset.salaries_for(WorkMode::Fixed), &edges),
        flex: bin_counts(&dataset.salaries_for(WorkMode::Flex), &edges),
        bins: edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_edges() {
        let edges = bin_edges(0.0, 30.0, 30);
        assert_eq!(edges.len(), 31);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[15], 15.0);
        assert_eq!(edges[30], 30.0);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let edges = bin_edges(0.0, 10.0, 5);
        let counts = bin_counts(&[0.0, 1.9, 2.0, 10.0], &edges);
        assert_eq!(counts, vec![2, 1, 0, 0, 1]);
    }

    #[test]
    fn test_nan_and_out_of_range_skipped() {
        let edges = bin_edges(0.0, 10.0, 2);
        let counts = bin_counts(&[f64::NAN, -1.0, 11.0, 5.0], &edges);
        assert_eq!(counts, vec![0, 1]);
    }

    #[test]
    fn test_degenerate_range() {
        let edges = bin_edges(7.0, 7.0, 3);
        assert_eq!(edges, vec![7.0, 7.0, 7.0, 7.0]);
        assert_eq!(bin_counts(&[7.0, 7.0], &edges), vec![0, 0, 2]);
    }
}
