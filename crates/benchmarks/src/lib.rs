//! Benchmark records for UML-to-OWL ontology generation runs.
//!
//! This crate provides the per-attempt [`BenchmarkRecord`], its JSON log
//! persistence, and report rendering.
//!
//! # Quick Start
//!
//! ```no_run
//! use uml_ontology_benchmarks::{BenchmarkLog, BenchmarkRecord};
//! use std::time::Duration;
//!
//! let record = BenchmarkRecord::from_attempt(
//!     "llama3.1:8b",
//!     "<uml:Model/>",
//!     "@prefix owl: <http://www.w3.org/2002/07/owl#> .",
//!     Duration::from_secs_f64(1.7),
//!     Some(42),
//!     None,
//! );
//!
//! uml_ontology_benchmarks::report::print(&record);
//! BenchmarkLog::default_path().append(&record)?;
//! # Ok::<(), uml_ontology_benchmarks::LogError>(())
//! ```
//!
//! # Modules
//!
//! - [`record`] - The canonical `BenchmarkRecord` struct
//! - [`io`] - The append-only JSON record log
//! - [`report`] - Textual and markdown report rendering
//! - [`compat`] - Adapter for the legacy untyped-map convention

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod compat;
pub mod io;
pub mod record;
pub mod report;

pub use io::{BenchmarkLog, LogError};
pub use record::BenchmarkRecord;
