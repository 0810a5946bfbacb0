//! Field extraction driven by declarative candidate tables.
//!
//! Each metadata field lists the places it has been found across schema
//! vintages, in priority order. One generic resolver walks those lists.

mod config;
mod engine;
mod registry;
mod types;
mod uri;

pub use config::create_clml_field_registry;
pub use engine::FieldExtractor;
pub use registry::FieldRegistry;
pub use types::{Candidate, Field, FieldDefault, FieldSpec, UriPart, ValueSource};
pub use uri::{parse_legislation_uri, parse_year, LegislationUri};
