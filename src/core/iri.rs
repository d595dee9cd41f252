//! Identifier sanitizing and resource IRI minting.
//!
//! Every resource in the graph is addressed as
//! `http://example.org/movielens/<kind>/<sanitized-id>`. The IRI depends only on the kind
//! and the raw identifier, which is what lets later loaders find a movie minted earlier.

use crate::core::ResourceKind;
use crate::vocab::MOVIELENS_NS;
use oxigraph::model::NamedNode;

/// Placeholder used in rating keys when the timestamp is blank
pub const MISSING_TIMESTAMP: &str = "t0";

/// Number of characters of the tag text kept in a tag key
pub const TAG_KEY_CHARS: usize = 40;

/// Strip surrounding whitespace, then drop every character that is not alphanumeric,
/// `-` or `_`. Dropped characters are removed, not replaced.
pub fn sanitize_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Mint the IRI of a resource of the given kind.
///
/// An id that sanitizes to nothing yields an IRI ending in `<kind>/`.
pub fn resource_iri(kind: ResourceKind, raw: &str) -> NamedNode {
    let iri = format!("{}{}/{}", MOVIELENS_NS, kind.as_str(), sanitize_id(raw));
    // The namespace is an absolute IRI and the suffix holds only alphanumerics, '-' and '_'.
    NamedNode::new_unchecked(iri)
}

/// Identity key of a rating: `<userId>-<movieId>-<timestamp or t0>`.
pub fn rating_key(user_id: &str, movie_id: &str, timestamp: Option<&str>) -> String {
    let timestamp = timestamp.map(str::trim).filter(|ts| !ts.is_empty());
    format!("{}-{}-{}", user_id, movie_id, timestamp.unwrap_or(MISSING_TIMESTAMP))
}

/// Identity key of a tag: `<movieId>-<first 40 characters of the tag text>`.
///
/// Distinct tags sharing their first 40 characters on the same movie share a key.
pub fn tag_key(movie_id: &str, tag_text: &str) -> String {
    let prefix: String = tag_text.chars().take(TAG_KEY_CHARS).collect();
    format!("{}-{}", movie_id, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_and_filters() {
        assert_eq!(sanitize_id("  42 "), "42");
        assert_eq!(sanitize_id("a b.c/d"), "abcd");
        assert_eq!(sanitize_id("user_1-x"), "user_1-x");
        assert_eq!(sanitize_id("Amélie"), "Amélie");
    }

    #[test]
    fn test_resource_iri_format() {
        let iri = resource_iri(ResourceKind::Movie, "1");
        assert_eq!(iri.as_str(), "http://example.org/movielens/movie/1");

        let iri = resource_iri(ResourceKind::User, " 7 ");
        assert_eq!(iri.as_str(), "http://example.org/movielens/user/7");
    }

    #[test]
    fn test_resource_iri_empty_after_sanitizing() {
        let iri = resource_iri(ResourceKind::Tag, "!!! ");
        assert_eq!(iri.as_str(), "http://example.org/movielens/tag/");
    }

    #[test]
    fn test_resource_iri_is_deterministic() {
        assert_eq!(resource_iri(ResourceKind::Movie, "318"), resource_iri(ResourceKind::Movie, "318"));
        assert_ne!(resource_iri(ResourceKind::Movie, "318"), resource_iri(ResourceKind::User, "318"));
    }

    #[test]
    fn test_rating_key_uses_placeholder() {
        assert_eq!(rating_key("7", "1", Some("1000")), "7-1-1000");
        assert_eq!(rating_key("7", "1", Some("  ")), "7-1-t0");
        assert_eq!(rating_key("7", "1", None), "7-1-t0");
        assert_eq!(rating_key("7", "1", Some(" 55 ")), "7-1-55");
    }

    #[test]
    fn test_rating_iri_collapses_key_punctuation() {
        let iri = resource_iri(ResourceKind::Rating, &rating_key("7", "1", Some("1000")));
        assert_eq!(iri.as_str(), "http://example.org/movielens/rating/7-1-1000");
    }

    #[test]
    fn test_tag_key_truncates_by_characters() {
        let long = "x".repeat(60);
        assert_eq!(tag_key("1", &long), format!("1-{}", "x".repeat(40)));

        let accented = "é".repeat(45);
        assert_eq!(tag_key("2", &accented).chars().count(), 2 + 40);
    }

    #[test]
    fn test_tag_key_collision_on_shared_prefix() {
        let base = "a".repeat(40);
        let first = format!("{}first", base);
        let second = format!("{}second", base);
        assert_eq!(tag_key("1", &first), tag_key("1", &second));
    }
}
