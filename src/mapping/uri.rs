//! Deterministic URI minting for institutes and their derived entities.
//!
//! Every URI is plain string concatenation: the namespace plus the GRID id for
//! an institute, and the institute URI plus a fixed suffix for each
//! sub-entity. The same inputs always produce the same URI.

/// Namespace institutes are minted under unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "http://openvivo.org/a/";

/// Entities hanging off an institute's contact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubEntity {
    ContactCard,
    Address,
    Geo,
    Email,
    Wikipedia,
    /// General web link with its 1-based rank.
    Link(u64),
}

impl SubEntity {
    /// Suffix appended to the institute URI.
    pub fn suffix(&self) -> String {
        match self {
            SubEntity::ContactCard => "-vcard".to_string(),
            SubEntity::Address => "-vcard-address".to_string(),
            SubEntity::Geo => "-vcard-geo".to_string(),
            SubEntity::Email => "-vcard-email".to_string(),
            SubEntity::Wikipedia => "-vcard-wikipedia".to_string(),
            SubEntity::Link(rank) => format!("-vcard-link{}", rank),
        }
    }
}

/// URI for a sub-entity of the institute at `institute_uri`.
pub fn sub_entity_uri(institute_uri: &str, kind: SubEntity) -> String {
    format!("{}{}", institute_uri, kind.suffix())
}

/// Mints institute and year URIs under one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriMinter {
    namespace: String,
}

impl Default for UriMinter {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl UriMinter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// URI of the institute with GRID id `grid_id`.
    pub fn institute(&self, grid_id: &str) -> String {
        format!("{}{}", self.namespace, grid_id)
    }

    /// Shared node for a founding year; every institute founded that year points at it.
    pub fn year(&self, year: i64) -> String {
        format!("{}date{}", self.namespace, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_institute_uri_is_deterministic() {
        let minter = UriMinter::default();
        let a = minter.institute("grid.15276.37");
        let b = UriMinter::default().institute("grid.15276.37");
        assert_eq!(a, b);
        assert_eq!(a, "http://openvivo.org/a/grid.15276.37");
    }

    #[test]
    fn test_sub_entity_uris() {
        let inst = "http://openvivo.org/a/grid.1.1";
        assert_eq!(
            sub_entity_uri(inst, SubEntity::ContactCard),
            "http://openvivo.org/a/grid.1.1-vcard"
        );
        assert_eq!(
            sub_entity_uri(inst, SubEntity::Address),
            "http://openvivo.org/a/grid.1.1-vcard-address"
        );
        assert_eq!(
            sub_entity_uri(inst, SubEntity::Link(3)),
            "http://openvivo.org/a/grid.1.1-vcard-link3"
        );
    }

    #[test]
    fn test_distinct_kinds_never_collide() {
        let inst = "http://openvivo.org/a/grid.1.1";
        let kinds = [
            SubEntity::ContactCard,
            SubEntity::Address,
            SubEntity::Geo,
            SubEntity::Email,
            SubEntity::Wikipedia,
            SubEntity::Link(1),
            SubEntity::Link(2),
            SubEntity::Link(12),
        ];
        let uris: HashSet<_> = kinds.iter().map(|k| sub_entity_uri(inst, *k)).collect();
        assert_eq!(uris.len(), kinds.len());
        assert!(!uris.contains(inst));
    }

    #[test]
    fn test_year_uri_is_shared() {
        let minter = UriMinter::new("http://example.org/");
        assert_eq!(minter.year(1853), "http://example.org/date1853");
        assert_eq!(minter.year(1853), minter.year(1853));
    }
}
