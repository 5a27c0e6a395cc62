//! mutex-list-bench - sorted linked list under serial and mutex execution
//!
//! Runs a member/insert/delete workload against a pre-populated sorted
//! list, once on a single thread and once from worker threads sharing one
//! lock, and reports the mean and standard deviation of trial durations.

use std::io;

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use mutex_list_bench::benchmark::Orchestrator;
use mutex_list_bench::config::{prompt_from_terminal, BenchmarkConfig, CliArgs};
use mutex_list_bench::metrics::MetricsReporter;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn print_banner(config: &BenchmarkConfig) {
    if !config.show_progress() {
        return;
    }

    println!("mutex-list-bench v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!("Workload: {}", config.profile);
    println!(
        "List size: {}, Operations: {}, Trials: {}",
        config.initial_size, config.operations, config.trials
    );
    println!("Mode: {:?}, Threads: {}", config.mode, config.threads);
    if config.seed != 0 {
        println!("Seed: {}", config.seed);
    }
    println!("====================================\n");
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let mut args = CliArgs::parse_args();

    // Setup logging
    setup_logging(args.verbose, args.quiet);

    if args.interactive {
        prompt_from_terminal(&mut args)?;
    }

    // Build configuration; an unknown case ends the run without trials
    let config = match BenchmarkConfig::from_cli(&args) {
        Ok(config) => config,
        Err(e) if e.is_clean_exit() => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    info!("{}", config.summary());

    print_banner(&config);

    let reporter = MetricsReporter::new(config.output_format);
    let orchestrator = Orchestrator::new(config);
    let session = orchestrator.run_all()?;

    reporter.report(&session)?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
