//! Rating loader: one `movie:Rating` per rating row, linked to its user and movie.

use crate::core::{rating_key, resource_iri, ResourceKind};
use crate::loaders::{LoadStats, MovieIndex, TransformContext};
use crate::parsing::csv_table::{CsvTable, MOVIE_ID_FIELDS, USER_ID_FIELDS};
use crate::vocab::{class, prop};
use crate::Result;
use oxigraph::model::vocab::{rdf, xsd};
use oxigraph::model::Literal;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load `ratings.csv` from disk.
pub fn load_ratings_file(
    ctx: &mut TransformContext,
    path: &Path,
    movies: &MovieIndex,
) -> Result<LoadStats> {
    info!(path = %path.display(), "loading ratings");
    let mut table = CsvTable::open(path)?;
    load_ratings(ctx, &mut table, movies)
}

/// Add every rating row to the graph.
///
/// A row is skipped when the user id, movie id or rating is missing, or when the movie is
/// not in `movies`. Rows with the same user, movie and timestamp map to the same rating
/// resource; each of them still counts as added.
pub fn load_ratings<R: Read>(
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
                warn!(error = %err, "skipping undecodable rating row");
                stats.skipped += 1;
                continue;
            }
        };

        let (Some(user_id), Some(movie_id), Some(value)) = (
            row.first_present(&USER_ID_FIELDS),
            row.first_present(&MOVIE_ID_FIELDS),
            row.non_empty("rating"),
        ) else {
            debug!(line = ?row.line(), "rating row with missing user, movie or rating");
            stats.skipped += 1;
            continue;
        };

        let Some(movie) = movies.get(movie_id) else {
            debug!(line = ?row.line(), movie_id, "rating for unknown movie");
            stats.skipped += 1;
            continue;
        };

        let user = ctx.users.resolve(&mut ctx.graph, user_id);
        let rating = resource_iri(ResourceKind::Rating, &rating_key(user_id, movie_id, row.get("timestamp")));

        ctx.graph.add(rating.as_ref(), rdf::TYPE, class::RATING);
        ctx.graph.add(rating.as_ref(), prop::USER, user.as_ref());
        ctx.graph.add(rating.as_ref(), prop::MOVIE, movie.as_ref());
        ctx.graph.add(rating.as_ref(), prop::VALUE, rating_value(value).as_ref());
        ctx.graph.add(movie.as_ref(), prop::HAS_RATING, rating.as_ref());

        stats.added += 1;
    }

    info!(added = stats.added, skipped = stats.skipped, users = ctx.users.len(), "ratings loaded");
    Ok(stats)
}

/// Literal for a rating value: `xsd:decimal` when the trimmed value is a finite number,
/// otherwise the raw value as a plain string.
pub fn rating_value(raw: &str) -> Literal {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => {
            Literal::new_typed_literal(decimal_lexical(number), xsd::DECIMAL)
        }
        _ => Literal::new_simple_literal(raw),
    }
}

/// Plain decimal notation that always carries a fractional part.
fn decimal_lexical(number: f64) -> String {
    let text = number.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::load_movies;
    use oxigraph::model::{NamedNode, Term, TripleRef};

    const MOVIES: &str = "movieId,title,genres\n1,Toy Story,Animation|Comedy\n2,Jumanji,Adventure\n";

    fn load(ratings: &str) -> (TransformContext, LoadStats) {
        let mut ctx = TransformContext::new();
        let mut movies = CsvTable::from_reader(MOVIES.as_bytes()).unwrap();
        let index = load_movies(&mut ctx, &mut movies).unwrap();
        let mut table = CsvTable::from_reader(ratings.as_bytes()).unwrap();
        let stats = load_ratings(&mut ctx, &mut table, &index).unwrap();
        (ctx, stats)
    }

    fn rating_count(ctx: &TransformContext) -> usize {
        ctx.graph
            .graph()
            .subjects_for_predicate_object(rdf::TYPE, class::RATING)
            .count()
    }

    #[test]
    fn test_rating_links_user_and_movie() {
        let (ctx, stats) = load("userId,movieId,rating,timestamp\n7,1,4.5,1000\n");
        assert_eq!(stats, LoadStats { added: 1, skipped: 0 });

        let rating = NamedNode::new("http://example.org/movielens/rating/7-1-1000").unwrap();
        let user = NamedNode::new("http://example.org/movielens/user/7").unwrap();
        let movie = NamedNode::new("http://example.org/movielens/movie/1").unwrap();
        let value = Literal::new_typed_literal("4.5", xsd::DECIMAL);
        let graph = ctx.graph.graph();

        assert!(graph.contains(TripleRef::new(rating.as_ref(), rdf::TYPE, class::RATING)));
        assert!(graph.contains(TripleRef::new(user.as_ref(), rdf::TYPE, class::USER)));
        assert!(graph.contains(TripleRef::new(rating.as_ref(), prop::USER, user.as_ref())));
        assert!(graph.contains(TripleRef::new(rating.as_ref(), prop::MOVIE, movie.as_ref())));
        assert!(graph.contains(TripleRef::new(rating.as_ref(), prop::VALUE, value.as_ref())));
        assert!(graph.contains(TripleRef::new(movie.as_ref(), prop::HAS_RATING, rating.as_ref())));
    }

    #[test]
    fn test_identical_rows_collapse_onto_one_rating() {
        let (ctx, stats) =
            load("userId,movieId,rating,timestamp\n7,1,4.5,1000\n7,1,4.5,1000\n");
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.rows(), 2);
        assert_eq!(rating_count(&ctx), 1);
    }

    #[test]
    fn test_user_created_once() {
        let (ctx, stats) =
            load("userId,movieId,rating,timestamp\n7,1,4.5,1000\n7,2,3.0,1001\n8,1,2.0,1002\n");
        assert_eq!(stats.added, 3);
        assert_eq!(ctx.users.len(), 2);
        let users = ctx.graph.graph().subjects_for_predicate_object(rdf::TYPE, class::USER).count();
        assert_eq!(users, 2);
    }

    #[test]
    fn test_unknown_movie_is_skipped() {
        let (ctx, stats) = load("userId,movieId,rating,timestamp\n7,999,4.0,1000\n");
        assert_eq!(stats, LoadStats { added: 0, skipped: 1 });
        assert_eq!(rating_count(&ctx), 0);
        assert!(ctx.users.is_empty());
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let (_, stats) = load("userId,movieId,rating,timestamp\n,1,4.0,1\n7,,4.0,2\n7,1,,3\n7,1,4.0,4\n");
        assert_eq!(stats, LoadStats { added: 1, skipped: 3 });
    }

    #[test]
    fn test_blank_timestamp_uses_placeholder() {
        let (ctx, _) = load("userId,movieId,rating,timestamp\n7,1,4.0,\n");
        let rating = NamedNode::new("http://example.org/movielens/rating/7-1-t0").unwrap();
        assert!(ctx.graph.graph().contains(TripleRef::new(rating.as_ref(), rdf::TYPE, class::RATING)));
    }

    #[test]
    fn test_missing_timestamp_column_uses_placeholder() {
        let (ctx, stats) = load("user_id,movie_id,rating\n7,2,3.5\n");
        assert_eq!(stats.added, 1);
        let rating = NamedNode::new("http://example.org/movielens/rating/7-2-t0").unwrap();
        assert!(ctx.graph.graph().contains(TripleRef::new(rating.as_ref(), rdf::TYPE, class::RATING)));
    }

    #[test]
    fn test_non_numeric_rating_falls_back_to_string() {
        let (ctx, stats) = load("userId,movieId,rating,timestamp\n7,1,N/A,1000\n");
        assert_eq!(stats.added, 1);

        let rating = NamedNode::new("http://example.org/movielens/rating/7-1-1000").unwrap();
        let values: Vec<_> = ctx
            .graph
            .graph()
            .objects_for_subject_predicate(rating.as_ref(), prop::VALUE)
            .map(|term| term.into_owned())
            .collect();
        assert_eq!(values, vec![Term::from(Literal::new_simple_literal("N/A"))]);
    }

    #[test]
    fn test_rating_value_lexical_forms() {
        assert_eq!(rating_value("4.5"), Literal::new_typed_literal("4.5", xsd::DECIMAL));
        assert_eq!(rating_value("4"), Literal::new_typed_literal("4.0", xsd::DECIMAL));
        assert_eq!(rating_value(" 3.0 "), Literal::new_typed_literal("3.0", xsd::DECIMAL));
        assert_eq!(rating_value("0.5"), Literal::new_typed_literal("0.5", xsd::DECIMAL));
        assert_eq!(rating_value("N/A"), Literal::new_simple_literal("N/A"));
        assert_eq!(rating_value("NaN"), Literal::new_simple_literal("NaN"));
        assert_eq!(rating_value("inf"), Literal::new_simple_literal("inf"));
    }

    #[test]
    fn test_undecodable_row_counts_as_skipped() {
        let mut ctx = TransformContext::new();
        let mut movies = CsvTable::from_reader(MOVIES.as_bytes()).unwrap();
        let index = load_movies(&mut ctx, &mut movies).unwrap();

        let content: &[u8] = b"userId,movieId,rating,timestamp\n7,1,4,1\n\xff,1,4,2\n8,2,2,3\n";
        let mut table = CsvTable::from_reader(content).unwrap();
        let stats = load_ratings(&mut ctx, &mut table, &index).unwrap();

        assert_eq!(stats, LoadStats { added: 2, skipped: 1 });
        assert_eq!(stats.rows(), 3);
        assert_eq!(rating_count(&ctx), 2);
    }
}
