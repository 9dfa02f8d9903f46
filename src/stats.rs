//! Sample statistics.
//!
//! Every function takes the samples in any order and returns `None` for an
//! empty slice, so an absent value never turns into a zero.

use serde::Serialize;

/// Per-timer statistics record, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimerStats {
    pub elapsed: f64,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub p95: Option<f64>,
}

impl TimerStats {
    /// Build the record from the elapsed time and the samples behind it
    #[must_use]
    pub fn from_samples(elapsed: f64, samples: &[f64]) -> Self {
        let sorted = sorted(samples);

        Self {
            elapsed,
            count: sorted.len(),
            min: sorted.first().copied(),
            max: sorted.last().copied(),
            mean: mean(&sorted),
            median: median_sorted(&sorted),
            p95: percentile_sorted(&sorted, 95.0),
        }
    }
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[must_use]
pub fn min(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().min_by(f64::total_cmp)
}

#[must_use]
pub fn max(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().max_by(f64::total_cmp)
}

#[must_use]
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Average of the elements at `(n-1)/2` and `n/2` of the sorted samples,
/// which is the median for both odd and even counts.
#[must_use]
pub fn median(samples: &[f64]) -> Option<f64> {
    median_sorted(&sorted(samples))
}

fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();

    if n == 0 {
        return None;
    }

    Some((sorted[(n - 1) / 2] + sorted[n / 2]) / 2.0)
}

/// Percentile with linear interpolation between closest ranks.
///
/// `p <= 0` yields `0.0` and `p >= 100` yields the maximum, so out of range
/// values are clamped instead of rejected. A single sample is returned as is
/// for any `p` inside the range. `NaN` has no rank and yields `None`.
#[must_use]
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    percentile_sorted(&sorted(samples), p)
}

fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();

    if n == 0 || p.is_nan() {
        return None;
    }

    if p <= 0.0 {
        return Some(0.0);
    }

    if p >= 100.0 {
        return sorted.last().copied();
    }

    if n == 1 {
        return Some(sorted[0]);
    }

    let pos = (p / 100.0) * (n - 1) as f64;
    let lo = pos.floor();
    let frac = pos - lo;
    let lo = lo as usize;

    // p < 100 keeps pos < n - 1, so lo + 1 is in bounds
    Some(sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a value");
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile(&[], 0.0), None);
        assert_eq!(percentile(&[], 100.0), None);
    }

    #[test]
    fn test_median() {
        assert_close(median(&[1.0, 2.0, 3.0]), 2.0);
        assert_close(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_close(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_close(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_percentile_boundaries() {
        let samples = [0.3, 0.1, 0.2];

        assert_close(percentile(&samples, 0.0), 0.0);
        assert_close(percentile(&samples, -5.0), 0.0);
        assert_close(percentile(&samples, 100.0), 0.3);
        assert_close(percentile(&samples, 250.0), 0.3);
        assert_eq!(percentile(&samples, f64::NAN), None);
    }

    #[test]
    fn test_percentile_single_sample() {
        for p in [0.5, 1.0, 25.0, 50.0, 99.9] {
            assert_close(percentile(&[0.42], p), 0.42);
        }
        assert_close(percentile(&[0.42], 100.0), 0.42);
    }

    #[test]
    fn test_percentile_interpolates() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_close(percentile(&samples, 50.0), 3.0);
        assert_close(percentile(&samples, 25.0), 2.0);
        // pos = 0.95 * 4 = 3.8
        assert_close(percentile(&samples, 95.0), 4.8);
        // pos = 0.1 * 4 = 0.4
        assert_close(percentile(&samples, 10.0), 1.4);
    }

    #[test]
    fn test_percentile_50_matches_median() {
        let samples = [0.1, 0.2, 0.1, 0.05];
        assert_close(percentile(&samples, 50.0), median(&samples).unwrap());

        let samples = [3.0, 9.0, 1.0, 4.0, 7.0];
        assert_close(percentile(&samples, 50.0), median(&samples).unwrap());
    }

    #[test]
    fn test_stats_record() {
        let stats = TimerStats::from_samples(0.45, &[0.1, 0.2, 0.1, 0.05]);

        assert_eq!(stats.count, 4);
        assert_close(Some(stats.elapsed), 0.45);
        assert_close(stats.min, 0.05);
        assert_close(stats.max, 0.2);
        assert_close(stats.mean, 0.1125);
        assert_close(stats.median, 0.1);
        // pos = 0.95 * 3 = 2.85 between 0.1 and 0.2
        assert_close(stats.p95, 0.185);
    }

    #[test]
    fn test_stats_record_empty() {
        let stats = TimerStats::from_samples(0.0, &[]);

        assert_eq!(stats.count, 0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.p95, None);

        let json = serde_json::to_value(stats).unwrap();
        assert!(json["min"].is_null());
        assert_eq!(json["count"], 0);
    }
}
