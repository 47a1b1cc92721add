#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Parser
//!
//! XML extraction, data models and affiliation classification for PubMed
//! E-utilities responses.
//!
//! This crate is pure and stateless: it turns ESearch and ESummary XML into
//! typed records and decides which authors carry an industry affiliation.
//! It has no network dependencies and can be used independently of any HTTP client.

pub mod affiliation;
pub mod error;
pub mod pubmed;
pub mod xml;

// Re-export main types for convenience
pub use affiliation::{
    AffiliationClass, AffiliationClassifier, AffiliationSummary, ACADEMIC_KEYWORDS,
    COMPANY_KEYWORDS,
};
pub use error::{ParseError, Result};
pub use pubmed::esearch::{parse_esearch_xml, SearchResult};
pub use pubmed::esummary::{parse_document_summaries, parse_esummary_xml};
pub use pubmed::models::{Author, DocumentSummary, Paper, UNKNOWN};
pub use xml::XmlNode;
