//! Descriptive statistics over the accepted numeric values.
//!
//! Everything here is full-pass over the in-memory value sequence; nothing
//! streams. Population semantics throughout: the variance divisor is the
//! full count, not count minus one.

use hashbrown::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// `None` when every value occurs at most once.
    pub mode: Option<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

/// Summarize the accepted values. Defined (all zeros) for an empty slice,
/// though the pipeline rejects that case before getting here.
pub fn summarize(values: &[f64]) -> StatsSummary {
    let mean = mean(values);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let variance = population_variance(values, mean);

    StatsSummary {
        count: values.len(),
        mean,
        median: median(&sorted),
        mode: mode(values),
        variance,
        std_dev: variance.sqrt(),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an ascending-sorted slice: middle element for odd counts, the
/// average of the two middle elements for even counts.
fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }

    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Most frequent value, or `None` when the maximum frequency is 1.
///
/// Ties break on earliest first occurrence in input order, not numeric
/// value. Values are keyed by their bit pattern so the map can hold floats;
/// equal floats parsed from equal text share a pattern.
fn mode(values: &[f64]) -> Option<f64> {
    // bits -> (frequency, first-occurrence index); -0.0 folds into 0.0 so
    // numerically equal values share a bucket
    let mut freq: HashMap<u64, (usize, usize)> = HashMap::new();

    for (idx, v) in values.iter().enumerate() {
        let v = if *v == 0.0 { &0.0 } else { v };
        freq.entry(v.to_bits())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, idx));
    }

    let max_count = freq.values().map(|(count, _)| *count).max().unwrap_or(0);
    if max_count <= 1 {
        return None;
    }

    freq.iter()
        .filter(|(_, (count, _))| *count == max_count)
        .min_by_key(|(_, (_, first))| *first)
        .map(|(bits, _)| f64::from_bits(*bits))
}

fn population_variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let acc: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();
    acc / values.len() as f64
}
