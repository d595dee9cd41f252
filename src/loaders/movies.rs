//! Movie loader: one `movie:Movie` per movie id, with optional title and genres.

use crate::core::{resource_iri, ResourceKind};
use crate::loaders::TransformContext;
use crate::parsing::csv_table::{CsvTable, MOVIE_ID_FIELDS};
use crate::vocab::{class, prop};
use crate::Result;
use oxigraph::model::vocab::rdf;
use oxigraph::model::{Literal, NamedNode};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Genres value MovieLens uses for movies without any genre
pub const NO_GENRES: &str = "(no genres listed)";

/// Raw movie id, exactly as it appears in `movies.csv`, to the movie IRI
pub type MovieIndex = HashMap<String, NamedNode>;

/// Load `movies.csv` from disk.
pub fn load_movies_file(ctx: &mut TransformContext, path: &Path) -> Result<MovieIndex> {
    info!(path = %path.display(), "loading movies");
    let mut table = CsvTable::open(path)?;
    load_movies(ctx, &mut table)
}

/// Add every movie row to the graph and return the id lookup.
///
/// Rows without a usable id contribute nothing; they are not an error.
pub fn load_movies<R: Read>(ctx: &mut TransformContext, table: &mut CsvTable<R>) -> Result<MovieIndex> {
    let mut index = MovieIndex::new();

    for row in table.rows() {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "ignoring undecodable movie row");
                continue;
            }
        };

        let Some(movie_id) = row.first_present(&MOVIE_ID_FIELDS) else {
            debug!(line = ?row.line(), "movie row without id");
            continue;
        };

        let movie = resource_iri(ResourceKind::Movie, movie_id);
        ctx.graph.add(movie.as_ref(), rdf::TYPE, class::MOVIE);

        let title = row.trimmed("title");
        if !title.is_empty() {
            ctx.graph.add(movie.as_ref(), prop::TITLE, Literal::new_simple_literal(title).as_ref());
        }

        // Kept as the single pipe-delimited string from the source.
        let genres = row.trimmed("genres");
        if !genres.is_empty() && genres != NO_GENRES {
            ctx.graph.add(movie.as_ref(), prop::GENRES, Literal::new_simple_literal(genres).as_ref());
        }

        index.insert(movie_id.to_string(), movie);
    }

    info!(movies = index.len(), "movies loaded");
    Ok(index)
}
