//! Metrics and reporting
//!
//! This module provides:
//! - Trial duration statistics (mean, standard deviation, percentiles)
//! - Text/JSON/CSV output of a finished session

pub mod reporter;
pub mod stats;

pub use reporter::MetricsReporter;
pub use stats::{speedup, TrialStats};
