//! Per-trial operation outcome counters
//!
//! Workers keep their own counts while running and the executor merges them
//! after join, so counting adds no synchronization to the measured loop.

use serde::Serialize;

use crate::workload::OperationTag;

/// Outcome tallies for one worker or one whole trial
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationCounts {
    pub member_hits: u64,
    pub member_misses: u64,
    pub inserts_applied: u64,
    pub inserts_rejected: u64,
    pub deletes_applied: u64,
    pub deletes_missed: u64,
}

impl OperationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the boolean outcome of one operation
    #[inline]
    pub fn record(&mut self, tag: OperationTag, outcome: bool) {
        let slot = match (tag, outcome) {
            (OperationTag::Member, true) => &mut self.member_hits,
            (OperationTag::Member, false) => &mut self.member_misses,
            (OperationTag::Insert, true) => &mut self.inserts_applied,
            (OperationTag::Insert, false) => &mut self.inserts_rejected,
            (OperationTag::Delete, true) => &mut self.deletes_applied,
            (OperationTag::Delete, false) => &mut self.deletes_missed,
        };
        *slot += 1;
    }

    /// Total operations recorded
    pub fn total(&self) -> u64 {
        OperationTag::ALL.iter().map(|&tag| self.total_for(tag)).sum()
    }

    /// Operations recorded for one tag
    pub fn total_for(&self, tag: OperationTag) -> u64 {
        match tag {
            OperationTag::Member => self.member_hits + self.member_misses,
            OperationTag::Insert => self.inserts_applied + self.inserts_rejected,
            OperationTag::Delete => self.deletes_applied + self.deletes_missed,
        }
    }

    /// Net change in list length implied by the recorded outcomes
    pub fn net_growth(&self) -> i64 {
        self.inserts_applied as i64 - self.deletes_applied as i64
    }

    pub fn merge(&mut self, other: &OperationCounts) {
        self.member_hits += other.member_hits;
        self.member_misses += other.member_misses;
        self.inserts_applied += other.inserts_applied;
        self.inserts_rejected += other.inserts_rejected;
        self.deletes_applied += other.deletes_applied;
        self.deletes_missed += other.deletes_missed;
    }
}
