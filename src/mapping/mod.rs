//! GRID record to VIVO graph mapping.
//!
//! The [`uri`] minter names everything; [`fields`], [`relationships`] and
//! [`contact`] each turn one part of a record into triples; [`assemble`]
//! combines them into the sub-graph for one institute.

pub mod assemble;
pub mod contact;
pub mod fields;
pub mod relationships;
pub mod uri;

pub use assemble::assemble_institute;
pub use contact::map_contact;
pub use fields::{
    category_class, map_acronyms, map_aliases, map_categories, map_established, map_external_ids,
};
pub use relationships::map_relationships;
pub use uri::{sub_entity_uri, SubEntity, UriMinter, DEFAULT_NAMESPACE};
