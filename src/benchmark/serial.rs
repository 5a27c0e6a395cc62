//! Single-threaded executor
//!
//! Replays the sequence in order against one list with no synchronization.

use std::time::Instant;

use tracing::debug;

use super::counters::OperationCounts;
use super::seed::worker_seed;
use super::target::ListTarget;
use super::trial::{ExecutorKind, TrialResult};
use crate::list::SortedList;
use crate::workload::{OperationSequence, MAX_RANDOM_VALUE};

/// Serial executor
pub struct SerialExecutor {
    seed: u64,
}

impl SerialExecutor {
    /// Create an executor whose value stream is seeded from `seed` (0 = random)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Run every operation in `sequence` against `list`, timing the whole pass
    pub fn run(&self, list: &mut SortedList<u32>, sequence: &OperationSequence) -> TrialResult {
        let mut rng = fastrand::Rng::with_seed(worker_seed(self.seed, 0));
        let mut counts = OperationCounts::new();

        let start = Instant::now();
        for &tag in sequence {
            let value = rng.u32(0..=MAX_RANDOM_VALUE);
            let outcome = list.apply(tag, value);
            counts.record(tag, outcome);
        }
        let elapsed = start.elapsed();

        debug!(
            "Serial pass: {} ops in {:.6}s, list length {}",
            counts.total(),
            elapsed.as_secs_f64(),
            list.len()
        );

        TrialResult {
            executor: ExecutorKind::Serial,
            threads: 1,
            elapsed,
            counts,
        }
    }
}
