//! Query-to-papers pipeline
//!
//! Runs search, summary fetch, extraction and classification strictly in
//! sequence. Failures are logged where they happen and folded into
//! [`PipelineOutcome`] instead of aborting the caller.

use papers_parser::{parse_document_summaries, AffiliationClassifier, Paper};
use tracing::{debug, error, info, instrument};

use crate::client::PubMedClient;
use crate::error::PubMedError;

/// Result of running the pipeline for one query
#[derive(Debug)]
pub enum PipelineOutcome {
    /// ESearch request failed; no summary request was made
    SearchFailed(PubMedError),
    /// The search succeeded but matched nothing
    NoMatches,
    /// ESummary request or its XML failed
    SummaryFailed(PubMedError),
    /// Classified papers in search order
    Papers(Vec<Paper>),
}

impl PipelineOutcome {
    /// Papers to report; empty for every outcome except [`PipelineOutcome::Papers`]
    pub fn papers(&self) -> &[Paper] {
        match self {
            PipelineOutcome::Papers(papers) => papers,
            _ => &[],
        }
    }

    pub fn into_papers(self) -> Vec<Paper> {
        match self {
            PipelineOutcome::Papers(papers) => papers,
            _ => Vec::new(),
        }
    }

    /// The error behind a failed outcome
    pub fn error(&self) -> Option<&PubMedError> {
        match self {
            PipelineOutcome::SearchFailed(err) | PipelineOutcome::SummaryFailed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether no identifiers came back from the search step
    pub fn has_no_ids(&self) -> bool {
        matches!(
            self,
            PipelineOutcome::SearchFailed(_) | PipelineOutcome::NoMatches
        )
    }
}

/// Search PubMed for `query`, fetch the summaries and classify every author
///
/// # Example
///
/// ```no_run
/// use papers_client::{collect_papers, PubMedClient};
/// use papers_parser::AffiliationClassifier;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::new()?;
///     let classifier = AffiliationClassifier::new();
///     let outcome = collect_papers(&client, &classifier, "cancer immunotherapy").await;
///     println!("{} papers", outcome.papers().len());
///     Ok(())
/// }
/// ```
#[instrument(skip(client, classifier))]
pub async fn collect_papers(
    client: &PubMedClient,
    classifier: &AffiliationClassifier,
    query: &str,
) -> PipelineOutcome {
    let pmids = match client.search_ids(query).await {
        Ok(pmids) if pmids.is_empty() => return PipelineOutcome::NoMatches,
        Ok(pmids) => pmids,
        Err(err) => {
            error!(error = %err, "Error searching PubMed");
            return PipelineOutcome::SearchFailed(err);
        }
    };

    debug!(pmids = pmids.len(), "Requesting summaries");
    let root = match client.fetch_summaries(&pmids).await {
        Ok(Some(root)) => root,
        Ok(None) => return PipelineOutcome::NoMatches,
        Err(err) => {
            error!(error = %err, "Error fetching paper details from ESummary");
            return PipelineOutcome::SummaryFailed(err);
        }
    };

    let papers = classifier.process_papers(parse_document_summaries(&root));
    info!(
        requested = pmids.len(),
        papers = papers.len(),
        "Fetched and processed paper details"
    );

    PipelineOutcome::Papers(papers)
}
