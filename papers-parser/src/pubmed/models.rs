//! Data models for PubMed summaries and classified papers

use std::collections::BTreeSet;

/// Placeholder used for fields the upstream document does not provide
pub const UNKNOWN: &str = "N/A";

/// An author as listed in an ESummary document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name, e.g. "Zhu N"
    pub name: String,
    /// Free-text affiliation, if the document carries one
    pub affiliation: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>, affiliation: Option<String>) -> Self {
        Self {
            name: name.into(),
            affiliation,
        }
    }
}

/// One ESummary `DocSum`, before affiliation classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub pmid: String,
    pub title: String,
    /// Publication date as PubMed prints it ("2020 Feb", "2021 Jan 24", ...)
    pub publication_date: String,
    pub authors: Vec<Author>,
    /// ESummary never carries e-mail addresses, so this stays `None`
    pub corresponding_author_email: Option<String>,
}

/// A paper with its industry-affiliated authors identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    pub pmid: String,
    pub title: String,
    pub publication_date: String,
    /// Names of authors with a company affiliation, in order of first appearance
    pub non_academic_authors: Vec<String>,
    /// Distinct affiliation strings that matched a company keyword
    pub company_affiliations: BTreeSet<String>,
    pub corresponding_author_email: Option<String>,
}
