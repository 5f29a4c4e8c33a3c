//! RDF model: terms, triples and a deduplicating graph.
//!
//! A [`Graph`] is a plain ordered set keyed by the full (subject, predicate,
//! object) value, so inserting a triple twice is a no-op and iteration order is
//! stable across runs.

pub mod vocab;

use std::collections::BTreeSet;

/// Object position of a triple: either an IRI or a literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Iri(String),
    /// Literal with its lexical form and optional datatype IRI (plain string when `None`).
    Literal {
        value: String,
        datatype: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Plain string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: None,
        }
    }

    /// `xsd:integer` literal.
    pub fn integer(value: u64) -> Self {
        Term::Literal {
            value: value.to_string(),
            datatype: Some(vocab::xsd::INTEGER.to_string()),
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }
}

/// A single (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Set of triples with idempotent insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` when it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Shorthand for inserting an IRI-to-IRI statement.
    pub fn add_link(&mut self, subject: &str, predicate: &str, object: &str) {
        self.insert(Triple::new(subject, predicate, Term::iri(object)));
    }

    /// Shorthand for inserting a plain string literal.
    pub fn add_literal(&mut self, subject: &str, predicate: &str, value: impl Into<String>) {
        self.insert(Triple::new(subject, predicate, Term::literal(value)));
    }

    /// Move every triple of `other` into this graph.
    pub fn union(&mut self, other: Graph) {
        self.triples.extend(other.triples);
    }

    /// Consuming form of [`Graph::union`], handy in folds.
    pub fn merged(mut self, other: Graph) -> Graph {
        self.union(other);
        self
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Triples in (subject, predicate, object) order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples whose subject is `subject`.
    pub fn about<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| t.subject == subject)
    }

    /// Objects of every `subject predicate ?o` statement.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.about(subject)
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
