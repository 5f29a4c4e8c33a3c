//! Mappers for the scalar attribute groups of an institute.
//!
//! Each function looks at one optional group and returns the triples for it;
//! an absent group yields an empty graph.

use super::UriMinter;
use crate::grid::Institute;
use crate::rdf::vocab::{rdf, skos, vivo};
use crate::rdf::Graph;

/// ISNI and FundRef identifiers.
pub fn map_external_ids(subject: &str, inst: &Institute) -> Graph {
    let mut graph = Graph::new();
    let Some(ids) = &inst.external_ids else {
        return graph;
    };

    if let Some(isni) = &ids.isni {
        for value in isni.values() {
            graph.add_literal(subject, vivo::ISNI, value);
        }
    }
    if let Some(fund_ref) = &ids.fund_ref {
        for value in fund_ref.values() {
            graph.add_literal(subject, vivo::FUND_REF_ID, value);
        }
    }
    graph
}

pub fn map_acronyms(subject: &str, inst: &Institute) -> Graph {
    let mut graph = Graph::new();
    for acronym in &inst.acronyms {
        graph.add_literal(subject, vivo::ABBREVIATION, acronym.as_str());
    }
    graph
}

/// Aliases become alternate labels, never the primary `rdfs:label`.
pub fn map_aliases(subject: &str, inst: &Institute) -> Graph {
    let mut graph = Graph::new();
    for alias in &inst.aliases {
        graph.add_literal(subject, skos::ALT_LABEL, alias.as_str());
    }
    graph
}

/// Founding year, pointing at the year node shared by every institute founded that year.
pub fn map_established(minter: &UriMinter, subject: &str, inst: &Institute) -> Graph {
    let mut graph = Graph::new();
    if let Some(year) = inst.established {
        graph.add_link(subject, vivo::DATE_ESTABLISHED, &minter.year(year));
    }
    graph
}

/// VIVO class for a GRID category tag. `None` for categories VIVO doesn't model.
pub fn category_class(tag: &str) -> Option<&'static str> {
    match tag {
        "Company" => Some(vivo::COMPANY),
        "Government" => Some(vivo::GOVERNMENT_AGENCY),
        "Healthcare" => Some(vivo::HEALTHCARE_ORGANIZATION),
        "Nonprofit" => Some(vivo::NON_PROFIT_COMPANY),
        "Education" => Some(vivo::EDUCATION_ORGANIZATION),
        "Archive" => Some(vivo::ARCHIVE_ORGANIZATION),
        // Facility, Other
        _ => None,
    }
}

pub fn map_categories(subject: &str, inst: &Institute) -> Graph {
    let mut graph = Graph::new();
    for class in inst.types.iter().filter_map(|t| category_class(t)) {
        graph.add_link(subject, rdf::TYPE, class);
    }
    graph
}
