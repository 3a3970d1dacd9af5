//! Benchmark record types.
//!
//! This module provides the canonical `BenchmarkRecord` struct produced once
//! per generation attempt, together with the size and rounding arithmetic
//! used to derive its fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Canonical per-attempt benchmark record.
///
/// One record is created immediately after each generation attempt, whether
/// it succeeded or failed, and is immutable afterwards. Optional fields are
/// omitted from the serialized form when absent.
///
/// Invariants upheld by the constructors:
/// - `success == false` implies `error` is present and non-empty, and both
///   token fields are absent.
/// - `success == true` implies `error` is absent.
/// - `tokens_per_second` is present iff `tokens_generated` is present and the
///   measured duration is positive, and equals tokens/duration rounded to
///   2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Model identifier the attempt ran against.
    pub model: String,
    /// Timestamp when the record was created (ISO-8601 on the wire).
    pub timestamp: DateTime<Utc>,
    /// Input size in characters.
    pub input_size_chars: u64,
    /// Input size in kilobytes (UTF-8 byte length / 1024, 3 decimals).
    pub input_size_kb: f64,
    /// Wall-clock duration of the attempt in seconds (3 decimals).
    pub generation_time_seconds: f64,
    /// Output size in characters.
    pub output_size_chars: u64,
    /// Output size in kilobytes (UTF-8 byte length / 1024, 3 decimals).
    pub output_size_kb: f64,
    /// Whether the attempt produced a reply.
    pub success: bool,
    /// Failure description, present only on failed attempts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Tokens generated, when the backend reported a count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_generated: Option<u64>,
    /// Generation throughput (tokens / duration, 2 decimals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_per_second: Option<f64>,
}

impl BenchmarkRecord {
    /// Build the record for a completed generation attempt.
    ///
    /// `error` carries the failure description for attempts that did not
    /// produce a usable reply; `output` is expected to be empty in that case.
    /// `tokens_generated` is honoured only on successful attempts with a
    /// positive duration, matching the throughput invariant.
    pub fn from_attempt(
        model: impl Into<String>,
        uml: &str,
        output: &str,
        duration: Duration,
        tokens_generated: Option<u64>,
        error: Option<String>,
    ) -> Self {
        let (input_size_chars, input_size_kb) = text_sizes(uml);
        let (output_size_chars, output_size_kb) = text_sizes(output);
        let seconds = duration.as_secs_f64();
        let success = error.is_none();

        let tokens_generated = if success { tokens_generated } else { None };
        let tokens_per_second = match tokens_generated {
            Some(tokens) if seconds > 0.0 => Some(round_to(tokens as f64 / seconds, 2)),
            _ => None,
        };

        Self {
            model: model.into(),
            timestamp: Utc::now(),
            input_size_chars,
            input_size_kb,
            generation_time_seconds: round_to(seconds, 3),
            output_size_chars,
            output_size_kb,
            success,
            error,
            tokens_generated,
            tokens_per_second,
        }
    }
}

/// Character count and kilobyte size of a text.
///
/// Kilobytes are derived from the UTF-8 byte length and rounded to 3 decimals.
pub fn text_sizes(text: &str) -> (u64, f64) {
    let chars = text.chars().count() as u64;
    let kb = round_to(text.len() as f64 / 1024.0, 3);
    (chars, kb)
}

/// Round a value to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_record_measures_both_sides() {
        let record = BenchmarkRecord::from_attempt(
            "llama3.1:8b",
            "<model/>",
            "ontology-text",
            Duration::from_secs_f64(2.0),
            Some(26),
            None,
        );

        assert!(record.success);
        assert_eq!(record.error, None);
        assert_eq!(record.input_size_chars, 8);
        assert_eq!(record.output_size_chars, 13);
        assert_eq!(record.output_size_kb, round_to(13.0 / 1024.0, 3));
        assert_eq!(record.generation_time_seconds, 2.0);
        assert_eq!(record.tokens_generated, Some(26));
        assert_eq!(record.tokens_per_second, Some(13.0));
    }

    #[test]
    fn failed_record_drops_token_fields() {
        let record = BenchmarkRecord::from_attempt(
            "llama3.1:8b",
            "<model/>",
            "",
            Duration::from_millis(250),
            Some(26),
            Some("connection refused".to_string()),
        );

        assert!(!record.success);
        assert_eq!(record.error.as_deref(), Some("connection refused"));
        assert_eq!(record.tokens_generated, None);
        assert_eq!(record.tokens_per_second, None);
        assert_eq!(record.output_size_chars, 0);
        assert_eq!(record.output_size_kb, 0.0);
    }

    #[test]
    fn throughput_absent_without_token_count() {
        let record = BenchmarkRecord::from_attempt(
            "m",
            "input",
            "output",
            Duration::from_secs(1),
            None,
            None,
        );

        assert!(record.success);
        assert_eq!(record.tokens_generated, None);
        assert_eq!(record.tokens_per_second, None);
    }

    #[test]
    fn throughput_absent_for_zero_duration() {
        let record = BenchmarkRecord::from_attempt(
            "m",
            "input",
            "output",
            Duration::ZERO,
            Some(10),
            None,
        );

        assert_eq!(record.tokens_generated, Some(10));
        assert_eq!(record.tokens_per_second, None);
    }

    #[test]
    fn throughput_is_rounded_to_two_decimals() {
        let record = BenchmarkRecord::from_attempt(
            "m",
            "input",
            "output",
            Duration::from_secs(3),
            Some(100),
            None,
        );

        assert_eq!(record.tokens_per_second, Some(33.33));
    }

    #[test]
    fn sizes_count_chars_and_utf8_bytes() {
        // Multibyte characters diverge: 4 chars, 8 UTF-8 bytes.
        let (chars, kb) = text_sizes("üüüü");
        assert_eq!(chars, 4);
        assert_eq!(kb, round_to(8.0 / 1024.0, 3));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let record = BenchmarkRecord::from_attempt(
            "m",
            "input",
            "output",
            Duration::from_secs(1),
            None,
            None,
        );
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("error"));
        assert!(!obj.contains_key("tokens_generated"));
        assert!(!obj.contains_key("tokens_per_second"));
        assert_eq!(obj["success"], serde_json::json!(true));
    }
}
