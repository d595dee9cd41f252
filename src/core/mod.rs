//! Core data structures and types for the MovieLens RDF transform

use std::fmt;

/// Kind of resource minted in the output graph.
/// The kind label is the path segment between the namespace and the sanitized id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// One per movie id in `movies.csv`
    Movie,
    /// One per distinct user id in `ratings.csv`
    User,
    /// One per (user, movie, timestamp)
    Rating,
    /// One per (movie, tag text prefix)
    Tag,
}

impl ResourceKind {
    /// Path segment used in the resource IRI.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Movie => "movie",
            ResourceKind::User => "user",
            ResourceKind::Rating => "rating",
            ResourceKind::Tag => "tag",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier sanitizing and IRI minting
pub mod iri;
pub use iri::*;
