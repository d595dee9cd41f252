//! The in-memory graph shared by all loaders, and its Turtle serialization.
//!
//! The graph has set semantics: adding a triple that is already present changes nothing.
//! Serialization sorts the triples by their N-Triples form before writing, so the output
//! does not depend on insertion order or on the graph's internal layout.

use crate::vocab::PREFIXES;
use crate::Result;
use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{Graph, NamedNodeRef, TermRef, Triple, TripleRef};
use std::io::{Read, Write};

/// Owns the growing graph and the prefix bindings of its serialization.
#[derive(Debug, Clone)]
pub struct GraphAssembler {
    graph: Graph,
    prefixes: Vec<(String, String)>,
}

impl GraphAssembler {
    /// Empty graph with the movie, schema, rdfs and xsd prefixes bound.
    pub fn new() -> Self {
        let prefixes =
            PREFIXES.iter().map(|(name, iri)| ((*name).to_string(), (*iri).to_string())).collect();
        Self { graph: Graph::new(), prefixes }
    }

    /// Add one triple. Returns `false` if the graph already held it.
    pub fn add<'a>(
        &mut self,
        subject: NamedNodeRef<'a>,
        predicate: NamedNodeRef<'a>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        self.graph.insert(TripleRef::new(subject, predicate, object))
    }

    /// Number of distinct triples.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Whether no triple has been added yet.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// The underlying oxigraph graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Write the graph as Turtle and hand the writer back.
    pub fn write_turtle<W: Write>(&self, writer: W) -> Result<W> {
        let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
        for (name, iri) in &self.prefixes {
            serializer = serializer.with_prefix(name.as_str(), iri.as_str())?;
        }

        let mut triples: Vec<TripleRef<'_>> = self.graph.iter().collect();
        triples.sort_by_cached_key(ToString::to_string);

        let mut writer = serializer.for_writer(writer);
        for triple in triples {
            writer.serialize_triple(triple)?;
        }
        Ok(writer.finish()?)
    }

    /// Serialize the graph to a Turtle string.
    pub fn to_turtle(&self) -> Result<String> {
        let buffer = self.write_turtle(Vec::new())?;
        String::from_utf8(buffer)
            .map_err(|e| crate::Error::Rdf(format!("Invalid UTF-8 in output: {}", e)))
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse Turtle back into a graph, e.g. to check a written file.
pub fn read_turtle<R: Read>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(reader) {
        let triple = Triple::from(quad?);
        graph.insert(&triple);
    }
    Ok(graph)
}
