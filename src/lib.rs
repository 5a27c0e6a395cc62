//! mutex-list-bench library
//!
//! Benchmarks a sorted singly-linked list under a member/insert/delete
//! workload, run serially and from worker threads sharing one global lock.

pub mod benchmark;
pub mod config;
pub mod list;
pub mod metrics;
pub mod utils;
pub mod workload;
