//! CLI for the UML ontology benchmark.
//!
//! This crate provides the `uml2owl` command-line interface: a `generate`
//! subcommand that runs one benchmarked generation attempt, and a `report`
//! subcommand that summarizes the record log.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use uml_ontology_benchmarks::{io::DEFAULT_LOG_FILE, report, BenchmarkLog};
use uml_ontology_generator::client::DEFAULT_BASE_URL;
use uml_ontology_generator::{OllamaClient, OntologyGenerator, DEFAULT_MODEL};

/// UML-to-OWL generation benchmark CLI.
#[derive(Parser, Debug)]
#[command(name = "uml2owl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an OWL ontology from a UML XMI file and record the attempt.
    ///
    /// Reads the UML text, runs one generation call against the configured
    /// model, prints the benchmark report, optionally writes the Turtle
    /// output, and appends the record to the JSON log.
    Generate {
        /// UML XMI input file.
        #[arg(short, long)]
        input: PathBuf,

        /// Model identifier to generate with.
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Base URL of the Ollama server.
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        endpoint: String,

        /// Benchmark log file to append the record to.
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,

        /// Write the generated Turtle to this file.
        #[arg(short, long)]
        ontology_out: Option<PathBuf>,

        /// Skip benchmarking: no record is produced and failures propagate.
        #[arg(long)]
        no_benchmark: bool,
    },

    /// Print a markdown summary of a benchmark log.
    Report {
        /// Benchmark log file to summarize.
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,
    },
}

/// Run the CLI with the process arguments.
///
/// # Errors
///
/// Returns an error if reading the input, the generation call (without
/// benchmarking), or persisting the record fails; the binary maps that to
/// exit code 1.
pub fn run() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            model,
            endpoint,
            log,
            ontology_out,
            no_benchmark,
        } => generate(input, model, endpoint, log, ontology_out, no_benchmark),
        Commands::Report { log } => {
            let records = BenchmarkLog::new(&log)
                .load()
                .with_context(|| format!("failed to load benchmark log {}", log.display()))?;
            print!("{}", report::summary(&records));
            Ok(())
        }
    }
}

fn generate(
    input: PathBuf,
    model: String,
    endpoint: String,
    log: PathBuf,
    ontology_out: Option<PathBuf>,
    no_benchmark: bool,
) -> anyhow::Result<()> {
    let uml = fs::read_to_string(&input)
        .with_context(|| format!("failed to read UML input {}", input.display()))?;
    info!(
        input = %input.display(),
        chars = uml.chars().count(),
        "loaded UML input"
    );

    let generator = OntologyGenerator::with_client(model, OllamaClient::with_base_url(endpoint));

    if no_benchmark {
        let ontology = generator.generate(&uml)?;
        emit_ontology(&ontology, ontology_out.as_deref())?;
        return Ok(());
    }

    let outcome = generator.generate_benchmarked(&uml)?;
    report::print(&outcome.record);

    if outcome.is_success() {
        emit_ontology(&outcome.ontology, ontology_out.as_deref())?;
    } else {
        warn!("no ontology generated");
    }

    BenchmarkLog::new(&log)
        .append(&outcome.record)
        .with_context(|| format!("failed to save benchmark record to {}", log.display()))?;
    println!("Benchmark record saved to {}", log.display());

    if !outcome.is_success() {
        anyhow::bail!(
            "generation failed: {}",
            outcome.record.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn emit_ontology(ontology: &str, out: Option<&std::path::Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, ontology)
                .with_context(|| format!("failed to write ontology to {}", path.display()))?;
            println!("Ontology saved to {}", path.display());
        }
        None => println!("{ontology}"),
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
