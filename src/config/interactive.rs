//! Interactive prompts
//!
//! Asks for the case number, the number of test runs and (when the mutex
//! executor will run) the thread count, one line each, and writes the
//! answers into the parsed CLI arguments. Prompts go to stderr so stdout
//! carries only the report.

use std::io::{self, BufRead, Write};

use super::cli::CliArgs;
use crate::benchmark::ExecutionMode;
use crate::utils::{BenchmarkError, Result};

/// Prompt on stderr and read answers from stdin into `args`
pub fn prompt_from_terminal(args: &mut CliArgs) -> Result<()> {
    let stdin = io::stdin();
    prompt_args(args, &mut stdin.lock(), &mut io::stderr())
}

/// Prompt on `output` and read answers from `input` into `args`
pub fn prompt_args<R: BufRead, W: Write>(
    args: &mut CliArgs,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    // The case is validated later so an unknown case gets the normal clean exit
    args.case = ask(input, output, "Enter the case number: ")?;

    args.trials = ask_number(input, output, "Enter the number of test runs required: ")?;

    if args.mode != ExecutionMode::Serial {
        args.threads = ask_number(input, output, "Enter the number of threads: ")?;
    }

    Ok(())
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BenchmarkError::Config(format!(
            "No answer given for '{}'",
            prompt.trim_end_matches([':', ' '])
        )));
    }
    Ok(line.trim().to_string())
}

fn ask_number<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<usize> {
    let answer = ask(input, output, prompt)?;
    answer
        .parse()
        .map_err(|_| BenchmarkError::Config(format!("Expected a number, got '{}'", answer)))
}
