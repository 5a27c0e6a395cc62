//! Trial duration statistics
//!
//! Mean and standard deviation are computed exactly from the durations in
//! seconds. Percentiles come from an HDR histogram of the same durations in
//! microseconds.

use std::time::Duration;

use hdrhistogram::Histogram;
use serde::Serialize;

/// Summary statistics over a set of trial durations (seconds)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrialStats {
    pub trials: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    /// Population standard deviation (n denominator)
    pub population_std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

impl TrialStats {
    /// Compute statistics from trial durations
    pub fn from_durations(durations: &[Duration]) -> Self {
        let secs: Vec<f64> = durations.iter().map(Duration::as_secs_f64).collect();
        let n = secs.len();
        if n == 0 {
            return Self::default();
        }

        let mean = secs.iter().sum::<f64>() / n as f64;
        let squared_dev: f64 = secs.iter().map(|s| (s - mean).powi(2)).sum();
        let std_dev = if n > 1 {
            (squared_dev / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        let population_std_dev = (squared_dev / n as f64).sqrt();

        let min = secs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = secs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // 1us to 1 hour, 3 significant digits
        let mut histogram =
            Histogram::<u64>::new_with_bounds(1, 3_600_000_000, 3).expect("Failed to create histogram");
        for d in durations {
            histogram.saturating_record((d.as_micros() as u64).max(1));
        }
        let percentile = |p: f64| histogram.value_at_percentile(p) as f64 / 1_000_000.0;

        Self {
            trials: n,
            mean,
            std_dev,
            population_std_dev,
            min,
            max,
            p50: percentile(50.0),
            p95: percentile(95.0),
            p99: percentile(99.0),
        }
    }

    /// Coefficient of variation (sample std dev / mean)
    pub fn relative_std_dev(&self) -> f64 {
        if self.mean > 0.0 {
            self.std_dev / self.mean
        } else {
            0.0
        }
    }
}

/// Ratio of baseline mean to candidate mean (>1 means the candidate is faster)
pub fn speedup(baseline: &TrialStats, candidate: &TrialStats) -> Option<f64> {
    if candidate.mean > 0.0 && baseline.trials > 0 && candidate.trials > 0 {
        Some(baseline.mean / candidate.mean)
    } else {
        None
    }
}
