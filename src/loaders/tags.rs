//! Tag loader: one `movie:Tag` per (movie, tag text) pair.
//!
//! `tags.csv` is optional. Its `userId` and `timestamp` columns do not take part in the
//! tag identity.

use crate::core::{resource_iri, tag_key, ResourceKind};
use crate::loaders::{LoadStats, MovieIndex, TransformContext};
use crate::parsing::csv_table::CsvTable;
use crate::vocab::{class, prop};
use crate::Result;
use oxigraph::model::vocab::rdf;
use oxigraph::model::Literal;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load `tags.csv` from disk. A missing file is not an error and adds nothing.
pub fn load_tags_file(ctx: &mut TransformContext, path: &Path, movies: &MovieIndex) -> Result<LoadStats> {
    if !path.exists() {
        debug!(path = %path.display(), "no tags table");
        return Ok(LoadStats::default());
    }
    info!(path = %path.display(), "loading tags");
    let mut table = CsvTable::open(path)?;
    load_tags(ctx, &mut table, movies)
}

/// Add every tag row to the graph.
pub fn load_tags<R: Read>(
    ctx: &mut TransformContext,
    table: &mut CsvTable<R>,
    movies: &MovieIndex,
) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for row in table.rows() {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "skipping undecodable tag row");
                stats.skipped += 1;
                continue;
            }
        };

        let tag_text = row.trimmed("tag");
        let Some(movie_id) = row.non_empty("movieId").filter(|_| !tag_text.is_empty()) else {
            debug!(line = ?row.line(), "tag row with missing movie or tag");
            stats.skipped += 1;
            continue;
        };

        let Some(movie) = movies.get(movie_id) else {
            debug!(line = ?row.line(), movie_id, "tag for unknown movie");
            stats.skipped += 1;
            continue;
        };

        let tag = resource_iri(ResourceKind::Tag, &tag_key(movie_id, tag_text));
        ctx.graph.add(tag.as_ref(), rdf::TYPE, class::TAG);
        ctx.graph.add(tag.as_ref(), prop::TAG_VALUE, Literal::new_simple_literal(tag_text).as_ref());
        ctx.graph.add(movie.as_ref(), prop::HAS_TAG, tag.as_ref());

        stats.added += 1;
    }

    info!(added = stats.added, skipped = stats.skipped, "tags loaded");
    Ok(stats)
}
