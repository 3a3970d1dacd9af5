// Copyright 2026 UML Ontology Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! UML-to-OWL ontology generation through a chat-completion endpoint.
//!
//! The UML XMI input is treated as opaque text: it is embedded verbatim in a
//! fixed instructional prompt and sent as one user turn to a locally hosted
//! model. The reply is expected (but not verified) to be an OWL ontology in
//! Turtle syntax.
//!
//! # Quick Start
//!
//! ```no_run
//! use uml_ontology_generator::OntologyGenerator;
//!
//! let generator = OntologyGenerator::new("llama3.1:8b");
//! let outcome = generator.generate_benchmarked("<uml:Model/>")?;
//! uml_ontology_benchmarks::report::print(&outcome.record);
//! # Ok::<(), uml_ontology_generator::GenerateError>(())
//! ```
//!
//! # Modules
//!
//! - [`client`] - The Ollama chat boundary and the mockable [`ChatApi`] seam
//! - [`generate`] - Prompt construction and the benchmarked generation call
//! - [`error`] - The generation error taxonomy

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod generate;

pub use client::{ChatApi, ChatMessage, ChatRequest, ChatResponse, OllamaClient};
pub use error::{GenerateError, Result};
pub use generate::{GenerationOutcome, OntologyGenerator, DEFAULT_MODEL};
