//! RDF vocabulary constants for the MovieLens graph.
//!
//! All classes and properties live under the movie-domain namespace. The schema.org,
//! RDFS and XSD namespaces are only bound as prefixes in the Turtle output.

use oxigraph::model::NamedNodeRef;

/// Movie-domain namespace, also the base of every minted resource IRI
pub const MOVIELENS_NS: &str = "http://example.org/movielens/";

/// schema.org namespace
pub const SCHEMA_NS: &str = "http://schema.org/";

/// RDFS namespace
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// XSD namespace
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// Prefix bindings written at the top of the Turtle output, in this order.
pub const PREFIXES: [(&str, &str); 4] =
    [("movie", MOVIELENS_NS), ("schema", SCHEMA_NS), ("rdfs", RDFS_NS), ("xsd", XSD_NS)];

/// Classes
pub mod class {
    use super::NamedNodeRef;

    /// movie:Movie
    pub const MOVIE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/Movie");

    /// movie:User
    pub const USER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/User");

    /// movie:Rating
    pub const RATING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/Rating");

    /// movie:Tag
    pub const TAG: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/Tag");
}

/// Properties
pub mod prop {
    use super::NamedNodeRef;

    /// movie:title (Movie -> string)
    pub const TITLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/title");

    /// movie:genres (Movie -> pipe-delimited string)
    pub const GENRES: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/genres");

    /// movie:hasRating (Movie -> Rating)
    pub const HAS_RATING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/hasRating");

    /// movie:user (Rating -> User)
    pub const USER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/user");

    /// movie:movie (Rating -> Movie)
    pub const MOVIE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/movie");

    /// movie:value (Rating -> xsd:decimal, or a plain string when unparseable)
    pub const VALUE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/value");

    /// movie:tagValue (Tag -> string)
    pub const TAG_VALUE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/tagValue");

    /// movie:hasTag (Movie -> Tag)
    pub const HAS_TAG: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://example.org/movielens/hasTag");
}
