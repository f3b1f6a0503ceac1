//! The one place that knows what an analyzed execution report looks like.

use crate::errors::{BenchError, BenchResult};
use regex::Regex;
use std::sync::OnceLock;

pub trait TimingExtractor: Send + Sync {
    /// Wrap a query so the engine executes it and reports timing.
    fn analyzed_form(&self, query: &str) -> String;

    /// Execution duration in milliseconds taken from an analyzed report.
    fn execution_time_ms(&self, report: &str) -> BenchResult<f64>;
}

/// PostgreSQL `EXPLAIN (ANALYZE ...)` text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgExplain;

impl TimingExtractor for PgExplain {
    fn analyzed_form(&self, query: &str) -> String {
        format!(
            "EXPLAIN (ANALYZE, BUFFERS, TIMING, SUMMARY) {};",
            query.trim().trim_end_matches(';')
        )
    }

    fn execution_time_ms(&self, report: &str) -> BenchResult<f64> {
        extract_execution_time(report)
    }
}

fn execution_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Execution Time:\s+([0-9]+(?:\.[0-9]+)?)\s+ms").expect("static regex")
    })
}

/// Value of the last `Execution Time: <n> ms` annotation. The summary line
/// comes after any nested plan text, so the last match wins.
pub fn extract_execution_time(report: &str) -> BenchResult<f64> {
    execution_time_re()
        .captures_iter(report)
        .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse::<f64>().ok()))
        .last()
        .ok_or(BenchError::TimingNotFound)
}
