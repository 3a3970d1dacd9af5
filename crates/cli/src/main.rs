//! uml2owl CLI entry point.

fn main() {
    if let Err(e) = uml_ontology_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
