//! Paper to report-row mapping

use papers_parser::{Paper, UNKNOWN};
use serde::Serialize;
use tracing::debug;

/// Report header, in column order
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One flat report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl From<&Paper> for ReportRow {
    fn from(paper: &Paper) -> Self {
        Self {
            pubmed_id: paper.pmid.clone(),
            title: paper.title.clone(),
            publication_date: paper.publication_date.clone(),
            non_academic_authors: join_or_unknown(&paper.non_academic_authors),
            // BTreeSet iterates in sorted order
            company_affiliations: join_or_unknown(&paper.company_affiliations),
            corresponding_author_email: paper
                .corresponding_author_email
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Convert papers to rows, keeping their order
pub fn papers_to_rows(papers: &[Paper]) -> Vec<ReportRow> {
    let rows: Vec<ReportRow> = papers.iter().map(ReportRow::from).collect();
    debug!(rows = rows.len(), "Formatted papers for output");
    rows
}

fn join_or_unknown<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    let joined = values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        UNKNOWN.to_string()
    } else {
        joined
    }
}
