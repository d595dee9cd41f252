//! MovieLens RDF - turn the MovieLens CSV tables into a Turtle graph
//!
//! Usage:
//!   movielens-rdf --root .
//!   movielens-rdf --root ~/movielens --out build/movielens.ttl
//!
//! Progress and counts go to stdout. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for
//! per-row diagnostics on stderr.

use clap::Parser;
use movielens_rdf::config::{TransformConfig, DEFAULT_OUTPUT};
use movielens_rdf::pipeline::Transformer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "movielens-rdf")]
#[command(about = "CSV -> RDF (Turtle) for the MovieLens tables", long_about = None)]
struct Args {
    /// Project root containing data/ (movies.csv, ratings.csv, optional tags.csv)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output Turtle file, relative to the root unless absolute
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let transformer = Transformer::new(TransformConfig::new(args.root, args.out)).with_progress(true);

    match transformer.run() {
        Ok(report) => {
            report.print_summary();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
