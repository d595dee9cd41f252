//! # MovieLens RDF
//!
//! MovieLens RDF turns the three MovieLens tables (`movies.csv`, `ratings.csv` and the
//! optional `tags.csv`) into a single RDF graph and writes it out as Turtle.
//!
//! The transform is a single pass: movies are loaded first and produce the id lookup that
//! the rating and tag loaders use to attach their resources to the right movie. Every
//! resource IRI is derived from the input identifiers alone, so repeated runs over the same
//! tables produce the same graph and the same bytes on disk.
//!
//! ## Features
//!
//! - Deterministic IRIs for movies, users, ratings and tags
//! - Per-row skip accounting instead of aborting on bad data
//! - Turtle output with stable triple ordering
//!
//! ## Example
//!
//! ```rust,no_run
//! use movielens_rdf::config::TransformConfig;
//! use movielens_rdf::pipeline::Transformer;
//!
//! fn example() -> movielens_rdf::Result<()> {
//!     let report = Transformer::new(TransformConfig::default()).run()?;
//!     report.print_summary();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

/// Core identifiers: resource kinds and IRI minting
pub mod core;

/// Fixed vocabulary and namespace bindings of the output graph
pub mod vocab;

/// Module for reading the CSV input tables
pub mod parsing;

/// Module for the loaders that turn table rows into triples
pub mod loaders;

/// Module owning the in-memory graph and its Turtle serialization
pub mod graph;

/// Module for configuration management
pub mod config;

/// Module wiring the loaders together into one run
pub mod pipeline;

pub mod error {
    //! Error types and result definitions

    use std::path::PathBuf;
    use thiserror::Error;

    /// Result type alias for transform operations
    pub type Result<T> = std::result::Result<T, Error>;

    /// Main error type for the transform
    #[derive(Error, Debug)]
    pub enum Error {
        /// A required input table is absent
        #[error("Input file not found: {}", .0.display())]
        MissingInput(PathBuf),
        /// CSV reader error
        #[error("CSV error: {0}")]
        Csv(#[from] csv::Error),
        /// IO error
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        /// RDF parse or serialization error
        #[error("RDF error: {0}")]
        Rdf(String),
        /// Configuration error
        #[error("Configuration error: {0}")]
        Config(String),
    }

    impl From<oxigraph::io::RdfParseError> for Error {
        fn from(err: oxigraph::io::RdfParseError) -> Self {
            Error::Rdf(err.to_string())
        }
    }

    impl From<oxigraph::model::IriParseError> for Error {
        fn from(err: oxigraph::model::IriParseError) -> Self {
            Error::Rdf(err.to_string())
        }
    }
}

// Re-export commonly used types
pub use error::{Error, Result};
