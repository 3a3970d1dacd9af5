//! Untyped-map adapter for the legacy calling convention.
//!
//! Older callers exchange benchmark metrics as loose JSON objects rather than
//! the structured [`BenchmarkRecord`]. This module is the only place that
//! conversion lives; everything else in the workspace works with the struct.

use crate::record::BenchmarkRecord;
use serde_json::Value;

/// Errors from converting an untyped metrics object.
#[derive(Debug, thiserror::Error)]
pub enum CompatError {
    /// The value is not an object or is missing required fields.
    #[error("not a valid benchmark metrics object: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Convert a record to a loose JSON object, omitting absent optional fields.
pub fn to_value(record: &BenchmarkRecord) -> Value {
    // skip_serializing_if on the record already drops the absent optionals.
    serde_json::to_value(record).unwrap_or(Value::Null)
}

/// Reconstruct a record from a loose JSON object.
///
/// Absent optional keys (`error`, `tokens_generated`, `tokens_per_second`)
/// deserialize as `None`; missing required keys are an error.
pub fn from_value(value: Value) -> Result<BenchmarkRecord, CompatError> {
    Ok(serde_json::from_value(value)?)
}
