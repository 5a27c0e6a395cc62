//! Command-line argument parsing
//!
//! Arguments are grouped by category. Every parameter the interactive
//! prompts ask for can also be given as a flag.

use clap::{Parser, ValueEnum};

use crate::benchmark::ExecutionMode;

/// Sorted linked list benchmark: serial vs. one global mutex
#[derive(Parser, Debug, Clone)]
#[command(name = "mutex-list-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Workload Selection =====
    /// Workload case: 1 (read-heavy), 2 (moderate-write), 3 (write-heavy)
    #[arg(short = 'c', long = "case", default_value = "1")]
    pub case: String,

    /// Custom mix "p_member,p_insert,p_delete" (overrides --case)
    #[arg(long = "mix")]
    pub mix: Option<String>,

    // ===== Benchmark Parameters =====
    /// Values pre-populated into the list (0..n)
    #[arg(short = 'n', long = "initial-size", default_value_t = 1000)]
    pub initial_size: u32,

    /// Operations per trial
    #[arg(short = 'm', long = "operations", default_value_t = 10000)]
    pub operations: usize,

    /// Number of trials per executor
    #[arg(short = 'r', long = "trials", default_value_t = 10)]
    pub trials: usize,

    /// Worker threads for the mutex executor (0 = available parallelism)
    #[arg(short = 't', long = "threads", default_value_t = 4)]
    pub threads: usize,

    /// Executors to run
    #[arg(long = "mode", value_enum, default_value_t = ExecutionMode::Both)]
    pub mode: ExecutionMode,

    /// Seed for random number generation (0 = random seed)
    #[arg(long = "seed", default_value_t = 0)]
    pub seed: u64,

    /// Check the list ordering invariant after every trial
    #[arg(long = "verify")]
    pub verify: bool,

    // ===== Output Options =====
    /// Output format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Prompt for case, trial count and thread count on stdin
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.trials == 0 {
            return Err("--trials must be at least 1".to_string());
        }

        if self.operations == 0 {
            return Err("--operations must be at least 1".to_string());
        }

        Ok(())
    }

    /// Get effective number of threads (0 = auto-detect)
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        } else {
            self.threads
        }
    }
}
