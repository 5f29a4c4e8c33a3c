pub mod config;
pub mod error;
pub mod rdf;
pub mod grid;
pub mod mapping;
pub mod batch;
pub mod serialize;
pub mod pipeline;
pub mod examine;

pub use config::Config;
pub use error::{Grid2VivoError, Result};
pub use mapping::{assemble_institute, UriMinter};
pub use rdf::{Graph, Term, Triple};
