//! Error types for mutex-list-bench

use std::io;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown workload case; the driver reports it and exits without running trials
    #[error("Invalid case number: {0}")]
    InvalidCase(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("List invariant violated after trial {trial}: {detail}")]
    Invariant { trial: usize, detail: String },
}

impl BenchmarkError {
    /// Whether this error should end the process cleanly rather than as a failure
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, Self::InvalidCase(_))
    }
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_case_is_clean_exit() {
        assert!(BenchmarkError::InvalidCase("7".to_string()).is_clean_exit());
        assert!(!BenchmarkError::Config("bad".to_string()).is_clean_exit());
        assert!(!BenchmarkError::Worker("panicked".to_string()).is_clean_exit());
    }

    #[test]
    fn test_display() {
        let err = BenchmarkError::InvalidCase("4".to_string());
        assert_eq!(err.to_string(), "Invalid case number: 4");

        let err = BenchmarkError::Invariant {
            trial: 2,
            detail: "3 >= 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "List invariant violated after trial 2: 3 >= 3"
        );
    }
}
