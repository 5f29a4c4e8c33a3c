//! Graph serializers.
//!
//! Terms are converted to `oxrdf` values at this boundary and written through
//! `oxrdfio`, which owns escaping and the concrete syntax. Triples go out in
//! the graph's sorted order, so the same graph always serializes to the same
//! bytes. In RDF/XML that order keeps each subject's statements contiguous,
//! giving one `rdf:Description` per subject.

use clap::ValueEnum;
use oxrdf::{Literal, NamedNode};
use oxrdfio::{RdfFormat, RdfSerializer};
use serde::Deserialize;
use std::fmt;
use std::io::Write;

use crate::error::{Grid2VivoError, Result};
use crate::rdf::vocab;
use crate::rdf::{Graph, Term, Triple};

/// Concrete syntax of the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-based N-Triples
    #[default]
    #[value(name = "ntriples")]
    NTriples,
    /// Record-oriented RDF/XML
    #[value(name = "rdfxml")]
    RdfXml,
}

impl OutputFormat {
    fn rdf_format(self) -> RdfFormat {
        match self {
            OutputFormat::NTriples => RdfFormat::NTriples,
            OutputFormat::RdfXml => RdfFormat::RdfXml,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::NTriples => f.write_str("ntriples"),
            OutputFormat::RdfXml => f.write_str("rdfxml"),
        }
    }
}

/// Write `graph` to `writer` in `format`.
pub fn write_graph<W: Write>(format: OutputFormat, graph: &Graph, writer: W) -> Result<()> {
    let mut serializer = RdfSerializer::from_format(format.rdf_format());
    if format == OutputFormat::RdfXml {
        // rdf is always declared by the writer itself
        for (prefix, ns) in vocab::PREFIXES.iter().filter(|(p, _)| *p != "rdf") {
            serializer = serializer
                .with_prefix(*prefix, *ns)
                .map_err(|e| Grid2VivoError::Serialize(format!("prefix {}: {}", prefix, e)))?;
        }
    }

    let mut out = serializer.for_writer(writer);
    for triple in graph {
        if format == OutputFormat::RdfXml {
            check_xml_text(triple)?;
        }
        out.serialize_triple(&to_oxrdf(triple)?)?;
    }
    out.finish()?.flush()?;
    Ok(())
}

/// Convert one triple, validating every IRI on the way.
fn to_oxrdf(triple: &Triple) -> Result<oxrdf::Triple> {
    let object: oxrdf::Term = match &triple.object {
        Term::Iri(iri) => named_node(iri)?.into(),
        Term::Literal {
            value,
            datatype: None,
        } => Literal::new_simple_literal(value.as_str()).into(),
        Term::Literal {
            value,
            datatype: Some(dt),
        } => Literal::new_typed_literal(value.as_str(), named_node(dt)?).into(),
    };
    Ok(oxrdf::Triple::new(
        named_node(&triple.subject)?,
        named_node(&triple.predicate)?,
        object,
    ))
}

fn named_node(iri: &str) -> Result<NamedNode> {
    NamedNode::new(iri).map_err(|e| Grid2VivoError::Serialize(format!("invalid IRI <{}>: {}", iri, e)))
}

/// XML 1.0 cannot carry most control characters, escaped or not.
fn check_xml_text(triple: &Triple) -> Result<()> {
    if let Term::Literal { value, .. } = &triple.object {
        if let Some(c) = value.chars().find(|c| !is_xml_char(*c)) {
            return Err(Grid2VivoError::Serialize(format!(
                "literal on <{}> contains U+{:04X}, which RDF/XML cannot represent",
                triple.subject, c as u32
            )));
        }
    }
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
