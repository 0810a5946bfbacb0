//! Legislation Metadata - Extract structured metadata from UK legislation.
//!
//! This crate turns legislation documents in the CLML markup family into a
//! stable [`MetadataRecord`], whatever schema vintage or namespace convention
//! a given document uses.
//!
//! # Example
//!
//! ```
//! use legislation_metadata::extract_metadata;
//!
//! let xml = r#"<Legislation xmlns="http://www.legislation.gov.uk/namespaces/legislation"
//!     DocumentURI="http://www.legislation.gov.uk/ukpga/2020/7">
//!   <Primary><Body>
//!     <P1 id="section-1"><Pnumber>1</Pnumber>
//!       <P1para><Text>This Act may be cited as the Test Act 2020.</Text></P1para>
//!     </P1>
//!   </Body></Primary>
//! </Legislation>"#;
//!
//! let record = extract_metadata(xml).unwrap();
//! assert_eq!(record.legislation_type, "ukpga");
//! assert_eq!(record.legislation_number.as_deref(), Some("7"));
//! assert_eq!(record.sections[0].title, "This Act may be cited as the Test Act 2020.");
//! ```
//!
//! # Architecture
//!
//! - [`xml`]: Parsing and namespace-tolerant tree navigation
//! - [`namespace`]: Namespace roles and matching
//! - [`fields`]: Declarative candidate tables for document-level fields
//! - [`sections`]: Provision vocabulary, enumeration and title inference
//! - [`effects`]: Unapplied effect (amendment) collection
//! - [`extractor`]: Record assembly
//! - [`atom`]: Atom feed listings
//! - [`structure`]: Namespace and metadata structure check
//! - [`report`]: Display view with presentation truncation
//! - [`config`]: Constants and extraction options
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod atom;
pub mod cli;
pub mod config;
pub mod effects;
pub mod error;
pub mod extractor;
pub mod fields;
pub mod namespace;
pub mod report;
pub mod sections;
pub mod structure;
pub mod text;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extractor::{extract_metadata, MetadataExtractor};

// Re-export commonly used items
pub use config::ExtractionConfig;
pub use error::{ExtractorError, Result};
pub use types::{AmendmentRecord, MetadataRecord, SectionRecord};
