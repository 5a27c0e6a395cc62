//! Multi-threaded executor over one coarse-grained lock
//!
//! Work is strided: worker `t` of `T` handles positions `t, t+T, t+2T, ...`
//! so every worker draws from across the whole sequence rather than owning
//! a contiguous range. Workers share a `LockedList`; the lock is taken for
//! each single operation and released before the next value is drawn.
//!
//! Workers run as scoped threads borrowing the list and the sequence, so
//! nothing they capture outlives the call even if a spawn fails midway.

use std::thread;
use std::time::Instant;

use tracing::debug;

use super::counters::OperationCounts;
use super::seed::worker_seed;
use super::target::ListTarget;
use super::trial::{ExecutorKind, TrialResult};
use crate::list::LockedList;
use crate::utils::{BenchmarkError, Result};
use crate::workload::{OperationSequence, MAX_RANDOM_VALUE};

/// Result from a worker thread
#[derive(Debug)]
pub struct WorkerResult {
    /// Worker ID
    pub worker_id: usize,
    /// Outcome tallies for this worker's positions
    pub counts: OperationCounts,
}

/// One worker's share of a trial
struct ListWorker {
    id: usize,
    stride: usize,
    /// Thread-local RNG, seeded once
    rng: fastrand::Rng,
}

impl ListWorker {
    fn new(id: usize, stride: usize, seed: u64) -> Self {
        Self {
            id,
            stride,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Main worker loop
    fn run(mut self, list: &LockedList<u32>, sequence: &OperationSequence) -> WorkerResult {
        let mut target = list;
        let mut counts = OperationCounts::new();

        for tag in sequence.strided(self.id, self.stride) {
            let value = self.rng.u32(0..=MAX_RANDOM_VALUE);
            let outcome = target.apply(tag, value);
            counts.record(tag, outcome);
        }

        WorkerResult {
            worker_id: self.id,
            counts,
        }
    }
}

/// Coarse-grained lock executor
pub struct ConcurrentExecutor {
    threads: usize,
    seed: u64,
}

impl ConcurrentExecutor {
    /// Create an executor with `threads` workers (must be at least 1)
    pub fn new(threads: usize, seed: u64) -> Result<Self> {
        if threads == 0 {
            return Err(BenchmarkError::Config(
                "Concurrent executor needs at least one thread".to_string(),
            ));
        }
        Ok(Self { threads, seed })
    }

    /// Run the sequence across all workers and time it
    ///
    /// Timing starts just before the first worker is spawned and stops after
    /// the last one has been joined.
    pub fn run(&self, list: &LockedList<u32>, sequence: &OperationSequence) -> Result<TrialResult> {
        let threads = self.threads;

        let start = Instant::now();
        let results = thread::scope(|s| -> Result<Vec<WorkerResult>> {
            let mut handles = Vec::with_capacity(threads);

            for worker_id in 0..threads {
                let seed = worker_seed(self.seed, worker_id);
                let handle = thread::Builder::new()
                    .name(format!("list-worker-{}", worker_id))
                    .spawn_scoped(s, move || {
                        ListWorker::new(worker_id, threads, seed).run(list, sequence)
                    })?;
                handles.push(handle);
            }

            handles
                .into_iter()
                .enumerate()
                .map(|(worker_id, h)| {
                    h.join().map_err(|_| {
                        BenchmarkError::Worker(format!("worker {} panicked", worker_id))
                    })
                })
                .collect()
        })?;
        let elapsed = start.elapsed();

        let mut counts = OperationCounts::new();
        for result in &results {
            debug!(
                "Worker {}: {} ops ({} inserts, {} deletes applied)",
                result.worker_id,
                result.counts.total(),
                result.counts.inserts_applied,
                result.counts.deletes_applied
            );
            counts.merge(&result.counts);
        }

        debug!(
            "Mutex pass: {} ops on {} threads in {:.6}s",
            counts.total(),
            threads,
            elapsed.as_secs_f64()
        );

        Ok(TrialResult {
            executor: ExecutorKind::Mutex,
            threads,
            elapsed,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::serial::SerialExecutor;
    use crate::list::SortedList;
    use crate::workload::{OperationTag, WorkloadProfile};

    #[test]
    fn test_zero_threads_rejected() {
        assert!(ConcurrentExecutor::new(0, 1).is_err());
        assert!(ConcurrentExecutor::new(3, 1).is_ok());
    }

    #[test]
    fn test_end_to_end_case_two() {
        let mut rng = fastrand::Rng::with_seed(2024);
        let seq = OperationSequence::generate(10_000, &WorkloadProfile::moderate_write(), &mut rng);
        let list = LockedList::new(SortedList::populated(1000));

        let result = ConcurrentExecutor::new(4, 0).unwrap().run(&list, &seq).unwrap();

        assert_eq!(result.executor, ExecutorKind::Mutex);
        assert_eq!(result.threads, 4);
        assert!(result.elapsed_secs() >= 0.0);
        assert_eq!(result.counts.total(), seq.len() as u64);

        let list = list.into_inner();
        assert!(list.first_order_violation().is_none());
        assert_eq!(list.len() as i64, 1000 + result.counts.net_growth());
    }

    #[test]
    fn test_each_position_processed_once() {
        let mut rng = fastrand::Rng::with_seed(8);
        let seq = OperationSequence::generate(997, &WorkloadProfile::write_heavy(), &mut rng);
        let list = LockedList::new(SortedList::populated(100));

        let result = ConcurrentExecutor::new(7, 3).unwrap().run(&list, &seq).unwrap();

        let expected = seq.tag_counts();
        for tag in OperationTag::ALL {
            assert_eq!(result.counts.total_for(tag), expected[tag.index()] as u64);
        }
    }

    #[test]
    fn test_more_threads_than_operations() {
        let insert_only = WorkloadProfile::new("insert-only", 0.0, 1.0, 0.0);
        let seq = OperationSequence::generate(3, &insert_only, &mut fastrand::Rng::with_seed(5));
        assert_eq!(seq.tag_counts(), [0, 3, 0]);
        let list = LockedList::new(SortedList::new());

        let result = ConcurrentExecutor::new(8, 5).unwrap().run(&list, &seq).unwrap();

        assert_eq!(result.counts.total(), 3);
        assert!(list.into_inner().len() <= 3);
    }

    #[test]
    fn test_single_thread_matches_serial() {
        // One worker with the same seed draws the same value stream as the serial executor
        let seq = OperationSequence::generate(
            5000,
            &WorkloadProfile::write_heavy(),
            &mut fastrand::Rng::with_seed(77),
        );

        let mut serial_list = SortedList::populated(500);
        let serial = SerialExecutor::new(31).run(&mut serial_list, &seq);

        let locked = LockedList::new(SortedList::populated(500));
        let concurrent = ConcurrentExecutor::new(1, 31).unwrap().run(&locked, &seq).unwrap();

        assert_eq!(serial.counts, concurrent.counts);
        assert!(serial_list.iter().eq(locked.into_inner().iter()));
    }

    #[test]
    fn test_disjoint_inserts_match_serial_reference() {
        let threads = 4usize;
        let per_thread = 250u32;
        let list = LockedList::new(SortedList::new());

        // Each worker inserts its own interleaved range, sharing one lock
        thread::scope(|s| {
            for t in 0..threads as u32 {
                let list = &list;
                s.spawn(move || {
                    let mut target = list;
                    for i in 0..per_thread {
                        assert!(target.apply(OperationTag::Insert, i * threads as u32 + t));
                    }
                });
            }
        });

        let mut reference = SortedList::new();
        for t in 0..threads as u32 {
            for i in 0..per_thread {
                reference.insert(i * threads as u32 + t);
            }
        }

        let list = list.into_inner();
        assert!(list.first_order_violation().is_none());
        assert_eq!(list.len(), threads * per_thread as usize);
        assert!(list.iter().eq(reference.iter()));
    }
}
