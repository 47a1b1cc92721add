//! Author affiliation classification
//!
//! A flat keyword heuristic: an affiliation is lower-cased and tested for
//! substrings from two fixed lists. Only a company match marks an author as
//! non-academic; the academic match is reported alongside but does not change
//! the outcome.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::pubmed::models::{Author, DocumentSummary, Paper};

/// Substrings indicating a university, hospital or public-sector affiliation
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "dept",
    "department",
    "hospital",
    "medical center",
    "research center",
    "academy",
    "clinic",
    "laboratories",
    "lab",
    "health system",
    "foundation",
    "charity",
    "phd",
    "md",
    "faculty",
    "professor",
    "student",
    "fellow",
    "postdoc",
    // Public health organisations
    "center for disease control",
    "cdc",
    "nih",
    "fda",
    "who",
];

/// Substrings indicating a company, generic corporate terms first
pub const COMPANY_KEYWORDS: &[&str] = &[
    "pharma",
    "pharmaceutical",
    "biotech",
    "company",
    "inc",
    "ltd",
    "corp",
    "corporation",
    "s.p.a.",
    "gmbh",
    "ag",
    "co.",
    "llc",
    "plc",
    "sa",
    "rnd",
    "research and development",
    "clinical development",
    "diagnostics",
    "manufacturing",
    "solutions",
    "therapeutics",
    "sciences",
    "innovations",
    "health",
    "life sciences",
    "group",
    "labs",
    // Named companies
    "pfizer",
    "merck",
    "astrazeneca",
    "gilead",
    "novartis",
    "roche",
    "bayer",
    "johnson & johnson",
    "sanofi",
    "eli lilly",
    "abbvie",
    "amgen",
    "biogen",
    "genentech",
    "takeda",
    "moderna",
    "biontech",
    "glaxosmithkline",
    "gsk",
    "boehringer ingelheim",
    "regeneron",
    "vertex",
    "celgene",
    "bristol myers squibb",
    "bms",
    "novavax",
    "janssen",
    "daiichi sankyo",
    "servier",
    "cubist",
    "shionogi",
    // Agri-biotech
    "syngenta",
    "basf",
    "monsanto",
    "dupont",
    "samsung bioepis",
    "biosimilar",
    "celltrion",
    "teva",
    "mylan",
    "grifols",
];

/// Keyword matches for a single affiliation string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffiliationClass {
    pub academic: bool,
    pub company: bool,
}

/// Industry-affiliated authors of one paper
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffiliationSummary {
    /// Author names in first-encounter order, without repeats
    pub non_academic_authors: Vec<String>,
    /// Matching affiliation strings exactly as published
    pub company_affiliations: BTreeSet<String>,
}

/// Keyword-based affiliation classifier
///
/// # Example
///
/// ```
/// use papers_parser::{AffiliationClassifier, Author};
///
/// let classifier = AffiliationClassifier::new();
/// let summary = classifier.identify_affiliations(&[
///     Author::new("Smith J", Some("Pfizer Inc, New York".to_string())),
///     Author::new("Lee K", Some("Dept of Biology, Stanford University".to_string())),
/// ]);
///
/// assert_eq!(summary.non_academic_authors, vec!["Smith J"]);
/// assert!(summary.company_affiliations.contains("Pfizer Inc, New York"));
/// ```
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    academic_keywords: &'static [&'static str],
    company_keywords: &'static [&'static str],
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self {
            academic_keywords: ACADEMIC_KEYWORDS,
            company_keywords: COMPANY_KEYWORDS,
        }
    }
}

impl AffiliationClassifier {
    /// Classifier using [`ACADEMIC_KEYWORDS`] and [`COMPANY_KEYWORDS`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Test an affiliation against both keyword lists (case-insensitive)
    ///
    /// An unknown affiliation matches neither list.
    pub fn classify(&self, affiliation: Option<&str>) -> AffiliationClass {
        let Some(affiliation) = affiliation else {
            return AffiliationClass::default();
        };

        let lower = affiliation.to_lowercase();
        AffiliationClass {
            academic: self.academic_keywords.iter().any(|k| lower.contains(k)),
            company: self.company_keywords.iter().any(|k| lower.contains(k)),
        }
    }

    /// Collect the non-academic authors and company affiliations of one paper
    pub fn identify_affiliations(&self, authors: &[Author]) -> AffiliationSummary {
        let mut summary = AffiliationSummary::default();

        for author in authors {
            let affiliation = author.affiliation.as_deref();
            let class = self.classify(affiliation);

            debug!(
                author = %author.name,
                affiliation = affiliation.unwrap_or_default(),
                academic = class.academic,
                company = class.company,
                "Classified author affiliation"
            );

            if !class.company {
                continue;
            }

            if !summary.non_academic_authors.contains(&author.name) {
                summary.non_academic_authors.push(author.name.clone());
            }
            if let Some(affiliation) = affiliation {
                summary.company_affiliations.insert(affiliation.to_string());
            }
        }

        summary
    }

    /// Classify a single document into a [`Paper`]
    pub fn classify_paper(&self, doc: DocumentSummary) -> Paper {
        let summary = self.identify_affiliations(&doc.authors);

        Paper {
            pmid: doc.pmid,
            title: doc.title,
            publication_date: doc.publication_date,
            non_academic_authors: summary.non_academic_authors,
            company_affiliations: summary.company_affiliations,
            corresponding_author_email: doc.corresponding_author_email,
        }
    }

    /// Classify documents into papers, keeping their order
    #[instrument(skip_all, fields(documents = docs.len()))]
    pub fn process_papers(&self, docs: Vec<DocumentSummary>) -> Vec<Paper> {
        let papers: Vec<Paper> = docs.into_iter().map(|d| self.classify_paper(d)).collect();
        debug!(papers = papers.len(), "Processed papers for affiliations");
        papers
    }
}
