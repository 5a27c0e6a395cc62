//! Workload profiles
//!
//! A profile is the probability triple (member, insert, delete) used to
//! size each block of a generated operation sequence. Three fixed cases
//! are provided; a custom mix can be parsed from `p_member,p_insert,p_delete`.

use serde::Serialize;

use super::operation::OperationTag;
use crate::utils::{BenchmarkError, Result};

/// How far a mix may drift from summing to 1 before it is flagged
const SUM_TOLERANCE: f64 = 1e-6;

/// Probability triple for member/insert/delete operations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadProfile {
    pub name: String,
    pub p_member: f64,
    pub p_insert: f64,
    pub p_delete: f64,
}

impl WorkloadProfile {
    /// Case 1: 99% member, 0.5% insert, 0.5% delete
    pub fn read_heavy() -> Self {
        Self::new("case-1 (read-heavy)", 0.99, 0.005, 0.005)
    }

    /// Case 2: 90% member, 5% insert, 5% delete
    pub fn moderate_write() -> Self {
        Self::new("case-2 (moderate-write)", 0.90, 0.05, 0.05)
    }

    /// Case 3: 50% member, 25% insert, 25% delete
    pub fn write_heavy() -> Self {
        Self::new("case-3 (write-heavy)", 0.50, 0.25, 0.25)
    }

    pub fn new(name: &str, p_member: f64, p_insert: f64, p_delete: f64) -> Self {
        Self {
            name: name.to_string(),
            p_member,
            p_insert,
            p_delete,
        }
    }

    /// Look up a preset by case number (1, 2 or 3)
    pub fn from_case(case: u8) -> Option<Self> {
        match case {
            1 => Some(Self::read_heavy()),
            2 => Some(Self::moderate_write()),
            3 => Some(Self::write_heavy()),
            _ => None,
        }
    }

    /// Parse a preset from its case number or name
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Ok(case) = s.parse::<u8>() {
            return Self::from_case(case);
        }
        match s.as_str() {
            "case1" | "case-1" | "read-heavy" | "read_heavy" => Some(Self::read_heavy()),
            "case2" | "case-2" | "moderate" | "moderate-write" | "moderate_write" => {
                Some(Self::moderate_write())
            }
            "case3" | "case-3" | "write-heavy" | "write_heavy" => Some(Self::write_heavy()),
            _ => None,
        }
    }

    /// Parse a custom mix: "p_member,p_insert,p_delete"
    ///
    /// Each probability must be a finite number in [0, 1]. The sum is not
    /// enforced; see [`WorkloadProfile::sums_to_one`].
    pub fn parse_mix(mix: &str) -> Result<Self> {
        let parts: Vec<&str> = mix.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(BenchmarkError::Config(format!(
                "Mix must have three comma-separated probabilities, got '{}'",
                mix
            )));
        }

        let mut probs = [0.0f64; 3];
        for (slot, part) in probs.iter_mut().zip(&parts) {
            let p: f64 = part.parse().map_err(|_| {
                BenchmarkError::Config(format!("Invalid probability: {}", part))
            })?;
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(BenchmarkError::Config(format!(
                    "Probability out of range [0, 1]: {}",
                    part
                )));
            }
            *slot = p;
        }

        Ok(Self::new(
            &format!("custom ({},{},{})", parts[0], parts[1], parts[2]),
            probs[0],
            probs[1],
            probs[2],
        ))
    }

    /// Probability assigned to a tag
    pub fn probability(&self, tag: OperationTag) -> f64 {
        match tag {
            OperationTag::Member => self.p_member,
            OperationTag::Insert => self.p_insert,
            OperationTag::Delete => self.p_delete,
        }
    }

    /// Whether the triple sums to 1 (within floating-point tolerance)
    pub fn sums_to_one(&self) -> bool {
        ((self.p_member + self.p_insert + self.p_delete) - 1.0).abs() < SUM_TOLERANCE
    }

    /// Rounded per-tag counts for `m` operations, in member/insert/delete order
    ///
    /// The counts are not adjusted to sum to `m`; any rounding remainder is dropped.
    pub fn counts(&self, m: usize) -> [usize; 3] {
        OperationTag::ALL.map(|tag| (m as f64 * self.probability(tag)).round() as usize)
    }
}

impl std::fmt::Display for WorkloadProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [member={}, insert={}, delete={}]",
            self.name, self.p_member, self.p_insert, self.p_delete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let p = WorkloadProfile::from_case(1).unwrap();
        assert_eq!((p.p_member, p.p_insert, p.p_delete), (0.99, 0.005, 0.005));
        let p = WorkloadProfile::from_case(2).unwrap();
        assert_eq!((p.p_member, p.p_insert, p.p_delete), (0.90, 0.05, 0.05));
        let p = WorkloadProfile::from_case(3).unwrap();
        assert_eq!((p.p_member, p.p_insert, p.p_delete), (0.50, 0.25, 0.25));
        assert!(WorkloadProfile::from_case(0).is_none());
        assert!(WorkloadProfile::from_case(4).is_none());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            WorkloadProfile::parse("read-heavy"),
            Some(WorkloadProfile::read_heavy())
        );
        assert_eq!(WorkloadProfile::parse(" 2 "), Some(WorkloadProfile::moderate_write()));
        assert_eq!(
            WorkloadProfile::parse("WRITE_HEAVY"),
            Some(WorkloadProfile::write_heavy())
        );
        assert!(WorkloadProfile::parse("5").is_none());
    }

    #[test]
    fn test_parse_mix() {
        let p = WorkloadProfile::parse_mix("0.8, 0.1, 0.1").unwrap();
        assert_eq!((p.p_member, p.p_insert, p.p_delete), (0.8, 0.1, 0.1));
        assert!(p.sums_to_one());

        assert!(WorkloadProfile::parse_mix("0.8,0.2").is_err());
        assert!(WorkloadProfile::parse_mix("0.8,x,0.1").is_err());
        assert!(WorkloadProfile::parse_mix("1.5,0,0").is_err());
        assert!(WorkloadProfile::parse_mix("-0.1,0.6,0.5").is_err());
    }

    #[test]
    fn test_mix_not_summing_to_one_is_accepted() {
        let p = WorkloadProfile::parse_mix("0.5,0.1,0.1").unwrap();
        assert!(!p.sums_to_one());
    }

    #[test]
    fn test_presets_sum_to_one() {
        for case in 1..=3 {
            assert!(WorkloadProfile::from_case(case).unwrap().sums_to_one());
        }
    }

    #[test]
    fn test_counts() {
        assert_eq!(WorkloadProfile::read_heavy().counts(1000), [990, 5, 5]);
        assert_eq!(WorkloadProfile::moderate_write().counts(10_000), [9000, 500, 500]);
        assert_eq!(WorkloadProfile::write_heavy().counts(10_000), [5000, 2500, 2500]);
    }

    #[test]
    fn test_counts_remainder_dropped() {
        // 0.333 * 10 rounds to 3 for each tag; the tenth slot is never filled
        let p = WorkloadProfile::new("thirds", 0.333, 0.333, 0.333);
        assert_eq!(p.counts(10), [3, 3, 3]);
    }
}
