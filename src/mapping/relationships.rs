//! Relationship list to triples.
//!
//! Affiliated and Related are symmetric and are written in both directions,
//! since GRID relationship lists can be one-sided. Child and Parent are
//! written from this institute only, once with the generic OBO part-of term
//! and once with the VIVO organization term.

use super::UriMinter;
use crate::error::{Grid2VivoError, Result};
use crate::grid::{Institute, RelationshipKind};
use crate::rdf::vocab::{obo, skos, vivo};
use crate::rdf::Graph;

/// Map every relationship of `inst`. Fails on the first kind outside [`RelationshipKind`].
pub fn map_relationships(minter: &UriMinter, subject: &str, inst: &Institute) -> Result<Graph> {
    let mut graph = Graph::new();

    for relationship in &inst.relationships {
        let kind: RelationshipKind = relationship.kind.parse().map_err(|kind| {
            Grid2VivoError::UnrecognizedRelationshipKind {
                institute: inst.id.clone(),
                kind,
            }
        })?;
        let target = minter.institute(&relationship.id);

        match kind {
            RelationshipKind::Affiliated => {
                graph.add_link(subject, vivo::HAS_AFFILIATED_ORGANIZATION, &target);
                graph.add_link(&target, vivo::HAS_AFFILIATED_ORGANIZATION, subject);
            }
            RelationshipKind::Related => {
                graph.add_link(subject, skos::RELATED, &target);
                graph.add_link(&target, skos::RELATED, subject);
            }
            RelationshipKind::Child => {
                graph.add_link(subject, obo::HAS_PART, &target);
                graph.add_link(subject, vivo::HAS_SUB_ORGANIZATION, &target);
            }
            RelationshipKind::Parent => {
                graph.add_link(subject, obo::PART_OF, &target);
                graph.add_link(subject, vivo::HAS_SUPER_ORGANIZATION, &target);
            }
            RelationshipKind::Other => {}
        }
    }

    Ok(graph)
}
