//! Loaders turning the MovieLens tables into triples.
//!
//! Loaders run strictly in order: movies first, then ratings and tags, which both resolve
//! movies through the [`MovieIndex`] the movie loader returns. All mutable state of a run
//! lives in a [`TransformContext`] that the caller owns and lends to each loader.

use crate::core::{resource_iri, ResourceKind};
use crate::graph::GraphAssembler;
use crate::vocab::class;
use oxigraph::model::vocab::rdf;
use oxigraph::model::NamedNode;
use serde::Serialize;
use std::collections::HashMap;

pub mod movies;
pub mod ratings;
pub mod tags;

pub use movies::{load_movies, load_movies_file, MovieIndex};
pub use ratings::{load_ratings, load_ratings_file, rating_value};
pub use tags::{load_tags, load_tags_file};

/// Row accounting of one loader. `added + skipped` equals the number of data rows read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Rows that contributed triples
    pub added: u64,
    /// Rows left out: missing fields, unknown movie or undecodable record
    pub skipped: u64,
}

impl LoadStats {
    /// Number of data rows seen.
    pub fn rows(&self) -> u64 {
        self.added + self.skipped
    }
}

/// Raw user id to user IRI. A user is typed in the graph the first time it is seen only.
#[derive(Debug, Default)]
pub struct UserCache {
    users: HashMap<String, NamedNode>,
}

impl UserCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self { users: HashMap::new() }
    }

    /// IRI of the user, minting it and asserting `movie:User` on first sight.
    pub fn resolve(&mut self, graph: &mut GraphAssembler, raw_id: &str) -> NamedNode {
        if let Some(user) = self.users.get(raw_id) {
            return user.clone();
        }
        let user = resource_iri(ResourceKind::User, raw_id);
        graph.add(user.as_ref(), rdf::TYPE, class::USER);
        self.users.insert(raw_id.to_string(), user.clone());
        user
    }

    /// Number of distinct raw user ids seen.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Mutable state of a single run, threaded through the loaders.
#[derive(Debug, Default)]
pub struct TransformContext {
    /// Graph every loader writes into
    pub graph: GraphAssembler,
    /// Users minted so far by the rating loader
    pub users: UserCache,
}

impl TransformContext {
    /// Empty graph and empty user cache.
    pub fn new() -> Self {
        Self { graph: GraphAssembler::new(), users: UserCache::new() }
    }
}
