//! Benchmark orchestrator
//!
//! Runs the configured executors for the requested number of trials. Each
//! trial starts from a freshly populated list and a freshly generated
//! operation sequence. When both executors run, trial `k` of each uses the
//! same seed, so both replay the same sequence and draw the same values.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::concurrent::ConcurrentExecutor;
use super::counters::OperationCounts;
use super::seed::derive_seed;
use super::serial::SerialExecutor;
use super::trial::{ExecutorKind, TrialResult};
use crate::config::BenchmarkConfig;
use crate::list::{LockedList, SortedList};
use crate::metrics::TrialStats;
use crate::utils::{BenchmarkError, Result};
use crate::workload::{OperationSequence, OperationTag, WorkloadProfile};

/// All trials of one executor
#[derive(Debug, Clone)]
pub struct ExecutorReport {
    pub executor: ExecutorKind,
    pub threads: usize,
    pub trials: Vec<TrialResult>,
    /// Duration statistics across trials
    pub stats: TrialStats,
    /// Outcome tallies summed across trials
    pub counts: OperationCounts,
}

impl ExecutorReport {
    pub fn new(executor: ExecutorKind, threads: usize, trials: Vec<TrialResult>) -> Self {
        let durations: Vec<Duration> = trials.iter().map(|t| t.elapsed).collect();
        let stats = TrialStats::from_durations(&durations);

        let mut counts = OperationCounts::new();
        for trial in &trials {
            counts.merge(&trial.counts);
        }

        Self {
            executor,
            threads,
            trials,
            stats,
            counts,
        }
    }

    /// Mean operations per second across trials
    pub fn mean_throughput(&self) -> f64 {
        if self.stats.mean > 0.0 && !self.trials.is_empty() {
            (self.counts.total() as f64 / self.trials.len() as f64) / self.stats.mean
        } else {
            0.0
        }
    }
}

/// Parameters and results of one benchmark session
#[derive(Debug, Clone)]
pub struct BenchmarkSession {
    pub profile: WorkloadProfile,
    pub initial_size: u32,
    pub operations: usize,
    pub trials: usize,
    pub threads: usize,
    pub seed: u64,
    pub reports: Vec<ExecutorReport>,
}

impl BenchmarkSession {
    /// Report for one executor, if it ran
    pub fn report_for(&self, executor: ExecutorKind) -> Option<&ExecutorReport> {
        self.reports.iter().find(|r| r.executor == executor)
    }
}

/// Benchmark orchestrator
pub struct Orchestrator {
    config: BenchmarkConfig,
    /// One seed per trial, shared by every executor
    trial_seeds: Vec<u64>,
}

impl Orchestrator {
    /// Create new orchestrator
    pub fn new(config: BenchmarkConfig) -> Self {
        let trial_seeds = (0..config.trials as u64)
            .map(|trial| derive_seed(config.seed, trial))
            .collect();

        Self {
            config,
            trial_seeds,
        }
    }

    /// Run every executor selected by the configured mode
    pub fn run_all(&self) -> Result<BenchmarkSession> {
        let executors = self.config.mode.executors();
        let progress = self.progress_bar((executors.len() * self.config.trials) as u64);

        let mut reports = Vec::with_capacity(executors.len());
        for &executor in executors {
            info!(
                "Running {} executor: {} trials of {} ops",
                executor, self.config.trials, self.config.operations
            );
            let report = self.run_executor(executor, progress.as_ref())?;
            info!(
                "{} done: mean {:.6}s, sd {:.6}s",
                executor, report.stats.mean, report.stats.std_dev
            );
            reports.push(report);
        }

        if let Some(pb) = progress {
            pb.finish_with_message("done");
        }

        Ok(BenchmarkSession {
            profile: self.config.profile.clone(),
            initial_size: self.config.initial_size,
            operations: self.config.operations,
            trials: self.config.trials,
            threads: self.config.threads,
            seed: self.config.seed,
            reports,
        })
    }

    /// Run all trials for one executor
    pub fn run_executor(
        &self,
        executor: ExecutorKind,
        progress: Option<&ProgressBar>,
    ) -> Result<ExecutorReport> {
        let threads = match executor {
            ExecutorKind::Serial => 1,
            ExecutorKind::Mutex => self.config.threads,
        };

        let mut trials = Vec::with_capacity(self.config.trials);
        for (trial, &seed) in self.trial_seeds.iter().enumerate() {
            if let Some(pb) = progress {
                pb.set_message(format!("{} trial {}", executor, trial + 1));
            }

            let result = self.run_trial(executor, trial, seed)?;
            debug!(
                "{} trial {}: {:.6}s ({} ops)",
                executor,
                trial + 1,
                result.elapsed_secs(),
                result.counts.total()
            );
            trials.push(result);

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        Ok(ExecutorReport::new(executor, threads, trials))
    }

    /// Run a single trial: fresh list, fresh sequence, one timed pass
    pub fn run_trial(&self, executor: ExecutorKind, trial: usize, seed: u64) -> Result<TrialResult> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let sequence =
            OperationSequence::generate(self.config.operations, &self.config.profile, &mut rng);
        let tag_counts = sequence.tag_counts();
        debug!(
            "Trial {} sequence: {} ops ({})",
            trial + 1,
            sequence.len(),
            OperationTag::ALL
                .iter()
                .map(|tag| format!("{}={}", tag, tag_counts[tag.index()]))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let list = SortedList::populated(self.config.initial_size);

        match executor {
            ExecutorKind::Serial => {
                let mut list = list;
                let result = SerialExecutor::new(seed).run(&mut list, &sequence);
                self.verify(trial, &list, &result.counts)?;
                Ok(result)
            }
            ExecutorKind::Mutex => {
                let locked = LockedList::new(list);
                let result = ConcurrentExecutor::new(self.config.threads, seed)?
                    .run(&locked, &sequence)?;
                self.verify(trial, &locked.into_inner(), &result.counts)?;
                Ok(result)
            }
        }
    }

    /// Check ordering and length against the recorded outcomes when `--verify` is set
    fn verify(&self, trial: usize, list: &SortedList<u32>, counts: &OperationCounts) -> Result<()> {
        if !self.config.verify {
            return Ok(());
        }
        if let Some((a, b)) = list.first_order_violation() {
            return Err(BenchmarkError::Invariant {
                trial: trial + 1,
                detail: format!("{} is followed by {}", a, b),
            });
        }

        let expected = i64::from(self.config.initial_size) + counts.net_growth();
        if list.len() as i64 != expected {
            return Err(BenchmarkError::Invariant {
                trial: trial + 1,
                detail: format!("length {} but outcomes imply {}", list.len(), expected),
            });
        }
        Ok(())
    }

    fn progress_bar(&self, total: u64) -> Option<ProgressBar> {
        if !self.config.show_progress() {
            return None;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    }
}

/// Format throughput without meaningless decimals
/// Examples: 1,234,567 ops/s, 987,654 ops/s
pub fn format_throughput(throughput: f64) -> String {
    let value = throughput as u64;
    format_count(value)
}

/// Format large numbers with thousands separators
/// Examples: 1,234,567 or 987,654
pub fn format_count(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}
