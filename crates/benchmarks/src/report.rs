//! Report rendering for benchmark records.
//!
//! One record renders to a fixed-format banner report for a human observer;
//! a slice of records renders to a markdown summary table.

use crate::record::BenchmarkRecord;
use std::fmt::Write;

const BANNER_WIDTH: usize = 60;

/// Render one record as a fixed-format textual report.
pub fn render(record: &BenchmarkRecord) -> String {
    let separator = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    writeln!(out, "{separator}").unwrap();
    writeln!(out, "{:^width$}", "BENCHMARK RESULTS", width = BANNER_WIDTH).unwrap();
    writeln!(out, "{separator}").unwrap();
    writeln!(out, "Model:            {}", record.model).unwrap();
    writeln!(out, "Timestamp:        {}", record.timestamp.to_rfc3339()).unwrap();
    writeln!(
        out,
        "Status:           {}",
        if record.success { "success" } else { "failed" }
    )
    .unwrap();
    writeln!(out, "{separator}").unwrap();
    writeln!(
        out,
        "Input Size:       {} chars ({:.2} KB)",
        record.input_size_chars, record.input_size_kb
    )
    .unwrap();
    writeln!(
        out,
        "Output Size:      {} chars ({:.2} KB)",
        record.output_size_chars, record.output_size_kb
    )
    .unwrap();
    writeln!(
        out,
        "Generation Time:  {:.3} seconds",
        record.generation_time_seconds
    )
    .unwrap();

    if let Some(tokens) = record.tokens_generated {
        writeln!(out, "Tokens Generated: {tokens}").unwrap();
    }
    if let Some(tps) = record.tokens_per_second {
        writeln!(out, "Tokens/Second:    {tps:.2}").unwrap();
    }
    if let Some(error) = &record.error {
        writeln!(out, "{separator}").unwrap();
        writeln!(out, "Error:            {error}").unwrap();
    }

    writeln!(out, "{separator}").unwrap();
    out
}

/// Print one record's report to stdout.
pub fn print(record: &BenchmarkRecord) {
    print!("{}", render(record));
}

/// Generate a markdown summary table over a slice of records.
pub fn summary(records: &[BenchmarkRecord]) -> String {
    let mut out = String::new();

    writeln!(out, "# Benchmark Summary").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "| Model | Timestamp | Duration (s) | Output (chars) | Tokens/s | Status |").unwrap();
    writeln!(out, "|-------|-----------|--------------|----------------|----------|--------|").unwrap();

    for record in records {
        let tps = record
            .tokens_per_second
            .map(|t| format!("{t:.2}"))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "| {} | {} | {:.3} | {} | {} | {} |",
            record.model,
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            record.generation_time_seconds,
            record.output_size_chars,
            tps,
            if record.success { "ok" } else { "failed" },
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Total runs: {}", records.len()).unwrap();
    out
}
