//! Operation sequence generation
//!
//! Tags are laid out in contiguous blocks (all members, then inserts, then
//! deletes) and then shuffled in place. The shuffle walks forward and swaps
//! position `i` with a partner drawn uniformly from `[0, i]`, which yields a
//! uniform permutation.

use super::operation::OperationTag;
use super::profile::WorkloadProfile;

/// Shuffled sequence of operation tags for one trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSequence {
    tags: Vec<OperationTag>,
}

impl OperationSequence {
    /// Generate a shuffled sequence for `m` operations under `profile`
    ///
    /// The length is the sum of the rounded per-tag counts and can differ
    /// from `m` by the rounding remainder. A mix that does not sum to 1 is
    /// used as given.
    pub fn generate(m: usize, profile: &WorkloadProfile, rng: &mut fastrand::Rng) -> Self {
        let counts = profile.counts(m);
        let mut tags = Vec::with_capacity(counts.iter().sum());
        for (tag, count) in OperationTag::ALL.into_iter().zip(counts) {
            tags.extend(std::iter::repeat(tag).take(count));
        }

        let mut sequence = Self { tags };
        sequence.shuffle(rng);
        sequence
    }

    /// Fisher-Yates shuffle, forward variant
    fn shuffle(&mut self, rng: &mut fastrand::Rng) {
        for i in 0..self.tags.len() {
            let j = rng.usize(0..=i);
            self.tags.swap(i, j);
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperationTag> {
        self.tags.iter()
    }

    /// Positions `worker, worker + stride, worker + 2*stride, ...`
    pub fn strided(&self, worker: usize, stride: usize) -> impl Iterator<Item = OperationTag> + '_ {
        self.tags
            .iter()
            .skip(worker)
            .step_by(stride.max(1))
            .copied()
    }

    /// Number of occurrences of each tag, in member/insert/delete order
    pub fn tag_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for tag in &self.tags {
            counts[tag.index()] += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a OperationSequence {
    type Item = &'a OperationTag;
    type IntoIter = std::slice::Iter<'a, OperationTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
