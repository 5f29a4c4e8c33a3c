use super::contact::map_contact;
use super::fields::{map_acronyms, map_aliases, map_categories, map_established, map_external_ids};
use super::relationships::map_relationships;
use super::UriMinter;
use crate::error::Result;
use crate::grid::Institute;
use crate::rdf::vocab::{foaf, rdf, rdfs, skos, vivo};
use crate::rdf::Graph;

/// Build the complete sub-graph for one institute.
///
/// Status is not checked here; filtering inactive records is up to the caller.
/// Fails only when a relationship kind is unrecognized.
pub fn assemble_institute(minter: &UriMinter, inst: &Institute) -> Result<Graph> {
    let subject = minter.institute(&inst.id);

    let mut graph = Graph::new();
    graph.add_link(&subject, rdf::TYPE, foaf::ORGANIZATION);
    graph.add_literal(&subject, vivo::GRID_ID, inst.id.as_str());
    graph.add_literal(&subject, rdfs::LABEL, inst.name.as_str());
    graph.add_literal(&subject, skos::PREF_LABEL, inst.name.as_str());

    graph.union(map_external_ids(&subject, inst));
    graph.union(map_acronyms(&subject, inst));
    graph.union(map_categories(&subject, inst));
    graph.union(map_established(minter, &subject, inst));
    graph.union(map_relationships(minter, &subject, inst)?);
    graph.union(map_aliases(&subject, inst));
    graph.union(map_contact(&subject, inst));

    Ok(graph)
}
