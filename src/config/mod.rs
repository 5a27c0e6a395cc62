//! Configuration module

pub mod benchmark_config;
pub mod cli;
pub mod interactive;

pub use benchmark_config::BenchmarkConfig;
pub use cli::{CliArgs, OutputFormat};
pub use interactive::{prompt_args, prompt_from_terminal};
