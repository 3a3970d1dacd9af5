//! JSON persistence for benchmark records.
//!
//! Records accumulate in a single pretty-printed JSON array on disk. Every
//! append rewrites the whole file through a sibling temp file followed by an
//! atomic rename, so an interrupted write never leaves a truncated log.

use crate::record::BenchmarkRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "benchmark_results.json";

/// Errors that can occur while loading or saving the record log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filesystem read/write failure.
    #[error("benchmark log I/O error: {0}")]
    Io(#[from] io::Error),

    /// The log file exists but does not hold a valid record array.
    #[error("benchmark log {} is not a valid record array: {source}", .path.display())]
    Malformed {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type for log operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Append-only benchmark record log backed by a JSON file.
///
/// Single-writer by design: the whole array is reloaded and rewritten on each
/// append, and concurrent writers can race at the rename point.
#[derive(Debug, Clone)]
pub struct BenchmarkLog {
    path: PathBuf,
}

impl BenchmarkLog {
    /// Create a log handle for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a log handle for [`DEFAULT_LOG_FILE`] in the working directory.
    pub fn default_path() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records currently in the log.
    ///
    /// A missing file is an empty log, not an error. Any other I/O failure or
    /// a file that does not parse as a record array is surfaced to the caller.
    pub fn load(&self) -> Result<Vec<BenchmarkRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no existing benchmark log");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|source| LogError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Append one record to the log.
    ///
    /// Loads the existing array, pushes the record, and rewrites the file via
    /// a temp-file rename. On failure the caller still owns the record and
    /// may retry or log it elsewhere.
    pub fn append(&self, record: &BenchmarkRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record.clone());
        self.write_all(&records)?;
        info!(
            path = %self.path.display(),
            total = records.len(),
            "benchmark record saved"
        );
        Ok(())
    }

    fn write_all(&self, records: &[BenchmarkRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(|source| LogError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "benchmark_results.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
