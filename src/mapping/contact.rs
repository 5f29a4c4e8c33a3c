//! Contact card (vCard) for an institute.
//!
//! An institute with no address gets no card at all, even when it has an
//! email or links. Only the first address is used.

use oxrdf::NamedNode;

use super::uri::{sub_entity_uri, SubEntity};
use crate::grid::{non_empty, Institute};
use crate::rdf::vocab::{rdf, rdfs, vcard, vivo};
use crate::rdf::{Graph, Term, Triple};

pub const WIKIPEDIA_LABEL: &str = "Wikipedia Page";
pub const HOME_PAGE_LABEL: &str = "Home Page";
pub const ADDITIONAL_LINK_LABEL: &str = "Additional Link";

pub fn map_contact(subject: &str, inst: &Institute) -> Graph {
    let mut graph = Graph::new();
    let Some(address) = inst.addresses.first() else {
        return graph;
    };

    let card = sub_entity_uri(subject, SubEntity::ContactCard);
    graph.add_link(&card, rdf::TYPE, vcard::ORGANIZATION);
    graph.add_link(subject, vivo::HAS_CONTACT_INFO, &card);

    // Address
    let address_uri = sub_entity_uri(subject, SubEntity::Address);
    graph.add_link(&card, vcard::HAS_ADDRESS, &address_uri);
    let fields = [
        (vcard::LOCALITY, &address.city),
        (vcard::POSTAL_CODE, &address.postcode),
        (vcard::REGION, &address.state),
        (vcard::COUNTRY, &address.country),
    ];
    for (predicate, value) in fields {
        if let Some(value) = non_empty(value) {
            graph.add_literal(&address_uri, predicate, value);
        }
    }
    let street = address.street_lines().join(";");
    if !street.is_empty() {
        graph.add_literal(&address_uri, vcard::STREET_ADDRESS, street);
    }

    // Geolocation
    if let Some((lat, lng)) = address.coordinates() {
        let geo_uri = sub_entity_uri(subject, SubEntity::Geo);
        graph.add_link(&card, vcard::HAS_GEO, &geo_uri);
        graph.add_literal(&geo_uri, vcard::GEO, format!("geo:{},{}", lat, lng));
    }

    // Email
    if let Some(email) = non_empty(&inst.email_address) {
        let email_uri = sub_entity_uri(subject, SubEntity::Email);
        graph.add_link(&card, vcard::HAS_EMAIL, &email_uri);
        graph.add_literal(&email_uri, vcard::EMAIL, email);
    }

    // URLs share one rank sequence; Wikipedia, when present, is always rank 1.
    let mut rank: u64 = 0;

    if let Some(url) = usable_url(&inst.wikipedia_url) {
        rank += 1;
        let entry = sub_entity_uri(subject, SubEntity::Wikipedia);
        add_url_entry(&mut graph, &card, &entry, url, rank, WIKIPEDIA_LABEL);
    }

    for (index, link) in inst.links.iter().enumerate() {
        let Some(url) = usable_url(link) else {
            continue;
        };
        rank += 1;
        let label = if index == 0 {
            HOME_PAGE_LABEL
        } else {
            ADDITIONAL_LINK_LABEL
        };
        let entry = sub_entity_uri(subject, SubEntity::Link(rank));
        add_url_entry(&mut graph, &card, &entry, url, rank, label);
    }

    graph
}

/// Trimmed URL text, or `None` for null, blank and non-IRI values.
fn usable_url(url: &Option<String>) -> Option<&str> {
    let url = url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
    match NamedNode::new(url) {
        Ok(_) => Some(url),
        Err(err) => {
            log::warn!("Ignoring URL {:?}: {}", url, err);
            None
        }
    }
}

fn add_url_entry(graph: &mut Graph, card: &str, entry: &str, url: &str, rank: u64, label: &str) {
    graph.add_link(card, vcard::HAS_URL, entry);
    graph.add_link(entry, vcard::URL, url);
    graph.insert(Triple::new(entry, vivo::RANK, Term::integer(rank)));
    graph.add_literal(entry, rdfs::LABEL, label);
}
