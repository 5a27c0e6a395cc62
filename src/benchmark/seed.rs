//! RNG seed derivation
//!
//! Every random stream (one per trial for sequence generation, one per
//! worker for operation values) is seeded once and then drawn from. A base
//! seed of 0 means "seed randomly".

/// Derive the seed for stream `index` from a base seed
///
/// Uses SplitMix64 mixing so neighbouring indices give unrelated streams.
#[inline]
pub fn derive_seed(base: u64, index: u64) -> u64 {
    if base == 0 {
        return fastrand::u64(..);
    }

    let mut x = base.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15));
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Seed for worker `worker_id` within a trial seeded with `trial_seed`
#[inline]
pub fn worker_seed(trial_seed: u64, worker_id: usize) -> u64 {
    derive_seed(trial_seed, worker_id as u64 + 1)
}
