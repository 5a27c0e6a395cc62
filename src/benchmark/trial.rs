//! Trial results

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use super::counters::OperationCounts;

/// Which executor ran a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    /// Single thread, no lock
    Serial,
    /// Worker threads sharing one coarse-grained lock
    Mutex,
}

impl ExecutorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Mutex => "mutex",
        }
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Executors to run in a benchmark session
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Serial executor only
    Serial,
    /// Mutex executor only
    Mutex,
    /// Serial then mutex, on identical parameters
    #[default]
    Both,
}

impl ExecutionMode {
    /// Executors this mode runs, in order
    pub fn executors(&self) -> &'static [ExecutorKind] {
        match self {
            Self::Serial => &[ExecutorKind::Serial],
            Self::Mutex => &[ExecutorKind::Mutex],
            Self::Both => &[ExecutorKind::Serial, ExecutorKind::Mutex],
        }
    }
}

/// Outcome of one timed pass over an operation sequence
#[derive(Debug, Clone)]
pub struct TrialResult {
    /// Executor that produced this result
    pub executor: ExecutorKind,
    /// Worker threads used (1 for serial)
    pub threads: usize,
    /// Wall-clock time for the whole pass
    pub elapsed: Duration,
    /// Outcome tallies across all workers
    pub counts: OperationCounts,
}

impl TrialResult {
    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
