//! Benchmark configuration derived from CLI arguments

use tracing::warn;

use super::cli::{CliArgs, OutputFormat};
use crate::benchmark::ExecutionMode;
use crate::utils::{BenchmarkError, Result};
use crate::workload::WorkloadProfile;

/// Complete benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    // Workload
    pub profile: WorkloadProfile,
    pub initial_size: u32,
    pub operations: usize,

    // Execution
    pub trials: usize,
    pub threads: usize,
    pub mode: ExecutionMode,
    pub seed: u64,
    pub verify: bool,

    // Output
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

impl BenchmarkConfig {
    /// Create configuration from CLI arguments
    ///
    /// An unknown case yields [`BenchmarkError::InvalidCase`]; any other
    /// problem yields [`BenchmarkError::Config`].
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        // Validate first
        args.validate().map_err(BenchmarkError::Config)?;

        // A custom mix takes precedence over the preset case
        let profile = match args.mix {
            Some(ref mix) => WorkloadProfile::parse_mix(mix)?,
            None => WorkloadProfile::parse(&args.case)
                .ok_or_else(|| BenchmarkError::InvalidCase(args.case.clone()))?,
        };

        if !profile.sums_to_one() {
            warn!(
                "Workload mix {} does not sum to 1; sequence length will differ from {}",
                profile, args.operations
            );
        }

        Ok(Self {
            profile,
            initial_size: args.initial_size,
            operations: args.operations,

            trials: args.trials,
            threads: args.effective_threads(),
            mode: args.mode,
            seed: args.seed,
            verify: args.verify,

            output_format: args.output_format,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Whether progress bars and banners should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Text
    }

    /// One-line summary of the run parameters
    pub fn summary(&self) -> String {
        format!(
            "profile={}, n={}, m={}, trials={}, threads={}, seed={}",
            self.profile.name, self.initial_size, self.operations, self.trials, self.threads, self.seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_defaults() {
        let args = CliArgs::parse_from(["test"]);
        let config = BenchmarkConfig::from_cli(&args).unwrap();
        assert_eq!(config.profile, WorkloadProfile::read_heavy());
        assert_eq!(config.initial_size, 1000);
        assert_eq!(config.operations, 10000);
        assert_eq!(config.threads, 4);
        assert!(config.show_progress());
    }

    #[test]
    fn test_invalid_case() {
        let args = CliArgs::parse_from(["test", "-c", "9"]);
        let err = BenchmarkConfig::from_cli(&args).unwrap_err();
        assert!(matches!(err, BenchmarkError::InvalidCase(ref c) if c == "9"));
        assert!(err.is_clean_exit());
    }

    #[test]
    fn test_mix_overrides_case() {
        let args = CliArgs::parse_from(["test", "-c", "9", "--mix", "0.6,0.2,0.2"]);
        let config = BenchmarkConfig::from_cli(&args).unwrap();
        assert_eq!(config.profile.p_member, 0.6);
    }

    #[test]
    fn test_mix_not_summing_to_one_is_accepted() {
        let args = CliArgs::parse_from(["test", "--mix", "0.5,0.1,0.1", "-m", "100"]);
        let config = BenchmarkConfig::from_cli(&args).unwrap();
        assert!(!config.profile.sums_to_one());
        assert_eq!(config.profile.counts(config.operations), [50, 10, 10]);
    }

    #[test]
    fn test_bad_mix_is_config_error() {
        let args = CliArgs::parse_from(["test", "--mix", "0.6,0.2"]);
        let err = BenchmarkConfig::from_cli(&args).unwrap_err();
        assert!(matches!(err, BenchmarkError::Config(_)));
    }

    #[test]
    fn test_json_output_hides_progress() {
        let args = CliArgs::parse_from(["test", "--output-format", "json"]);
        let config = BenchmarkConfig::from_cli(&args).unwrap();
        assert!(!config.show_progress());
    }
}
