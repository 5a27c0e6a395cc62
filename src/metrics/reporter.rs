//! Metrics reporter - output formatting
//!
//! Supports multiple output formats:
//! - Text (human-readable)
//! - JSON
//! - CSV

use std::io::{self, Write};

use super::stats::speedup;
use crate::benchmark::{format_count, format_throughput, BenchmarkSession, ExecutorKind};
use crate::config::OutputFormat;

/// Metrics reporter
pub struct MetricsReporter {
    format: OutputFormat,
}

impl MetricsReporter {
    /// Create new reporter with specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report a finished session to stdout
    pub fn report(&self, session: &BenchmarkSession) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(session, &mut out)
    }

    /// Report a finished session to any writer
    pub fn write_report<W: Write>(&self, session: &BenchmarkSession, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(session, out),
            OutputFormat::Json => self.write_json(session, out),
            OutputFormat::Csv => self.write_csv(session, out),
        }
    }

    fn write_text<W: Write>(&self, session: &BenchmarkSession, out: &mut W) -> io::Result<()> {
        for report in &session.reports {
            let stats = &report.stats;
            let counts = &report.counts;

            writeln!(
                out,
                "\n=== {} ({} thread{}) ===",
                report.executor,
                report.threads,
                if report.threads == 1 { "" } else { "s" }
            )?;
            writeln!(out, "Mean: {:.6}", stats.mean)?;
            writeln!(out, "Standard Deviation: {:.6}", stats.std_dev)?;
            writeln!(
                out,
                "Trials: {} | min={:.6}s max={:.6}s p50={:.6}s p95={:.6}s p99={:.6}s",
                stats.trials, stats.min, stats.max, stats.p50, stats.p95, stats.p99
            )?;
            writeln!(
                out,
                "Throughput: {} ops/s | Operations: {}",
                format_throughput(report.mean_throughput()),
                format_count(counts.total())
            )?;
            writeln!(
                out,
                "Member hit/miss: {}/{} | Insert applied/rejected: {}/{} | Delete applied/missed: {}/{}",
                format_count(counts.member_hits),
                format_count(counts.member_misses),
                format_count(counts.inserts_applied),
                format_count(counts.inserts_rejected),
                format_count(counts.deletes_applied),
                format_count(counts.deletes_missed)
            )?;
        }

        if let Some(ratio) = self.speedup(session) {
            writeln!(out, "\nSpeedup (serial mean / mutex mean): {:.3}x", ratio)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, session: &BenchmarkSession, out: &mut W) -> io::Result<()> {
        let json = serde_json::json!({
            "config": {
                "profile": session.profile,
                "initial_size": session.initial_size,
                "operations": session.operations,
                "trials": session.trials,
                "threads": session.threads,
                "seed": session.seed,
            },
            "results": session.reports.iter().map(|r| {
                serde_json::json!({
                    "executor": r.executor,
                    "threads": r.threads,
                    "stats": r.stats,
                    "relative_std_dev": r.stats.relative_std_dev(),
                    "counts": r.counts,
                    "throughput": r.mean_throughput(),
                    "durations_secs": r.trials.iter().map(|t| t.elapsed_secs()).collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
            "speedup": self.speedup(session),
        });

        let text = serde_json::to_string_pretty(&json).map_err(io::Error::other)?;
        writeln!(out, "{}", text)
    }

    fn write_csv<W: Write>(&self, session: &BenchmarkSession, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "executor,threads,profile,trials,mean_s,std_dev_s,min_s,max_s,p50_s,p95_s,p99_s,ops_per_sec"
        )?;
        for report in &session.reports {
            let stats = &report.stats;
            writeln!(
                out,
                "{},{},\"{}\",{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.2}",
                report.executor,
                report.threads,
                session.profile.name,
                stats.trials,
                stats.mean,
                stats.std_dev,
                stats.min,
                stats.max,
                stats.p50,
                stats.p95,
                stats.p99,
                report.mean_throughput()
            )?;
        }
        Ok(())
    }

    /// Serial-to-mutex speedup, when both executors ran
    fn speedup(&self, session: &BenchmarkSession) -> Option<f64> {
        let serial = session.report_for(ExecutorKind::Serial)?;
        let mutex = session.report_for(ExecutorKind::Mutex)?;
        speedup(&serial.stats, &mutex.stats)
    }
}
