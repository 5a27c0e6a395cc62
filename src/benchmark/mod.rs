//! Benchmark execution
//!
//! This module provides the serial and multi-threaded execution paths:
//! - SerialExecutor: replays a sequence on one thread, no lock
//! - ConcurrentExecutor: strided workers sharing one coarse-grained lock
//! - Orchestrator: runs trials per executor and collects results

pub mod concurrent;
pub mod counters;
pub mod orchestrator;
pub mod seed;
pub mod serial;
pub mod target;
pub mod trial;

pub use concurrent::{ConcurrentExecutor, WorkerResult};
pub use counters::OperationCounts;
pub use orchestrator::{format_count, format_throughput, BenchmarkSession, ExecutorReport, Orchestrator};
pub use serial::SerialExecutor;
pub use target::ListTarget;
pub use trial::{ExecutionMode, ExecutorKind, TrialResult};
