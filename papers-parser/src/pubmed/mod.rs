//! PubMed E-utilities response handling
//!
//! - `esearch` - identifier list from ESearch XML
//! - `esummary` - per-document metadata from ESummary XML
//! - `models` - records shared by the extractor, classifier and report

pub mod esearch;
pub mod esummary;
pub mod models;
