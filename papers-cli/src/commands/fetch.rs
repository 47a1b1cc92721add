use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use papers_client::config::DEFAULT_MAX_RESULTS;
use papers_client::{collect_papers, ClientConfig, PubMedClient};
use papers_parser::AffiliationClassifier;
use papers_report::{papers_to_rows, write_report, ReportDestination};
use tracing::{debug, error, warn};

#[derive(Args, Debug)]
pub struct Fetch {
    /// The search query for PubMed (e.g., 'COVID-19 vaccine clinical trials')
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// File to save the results to (e.g., 'results.csv'); printed to the console if omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum number of PubMed IDs to fetch
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// HTTP request timeout in seconds (default: no timeout)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl Fetch {
    /// Run search, classification and report. Failures are logged, never returned.
    pub async fn execute_with_config(&self, config: ClientConfig) -> Result<()> {
        let mut config = config.with_max_results(self.max_results);
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        let client = match PubMedClient::with_config(config) {
            Ok(client) => client,
            Err(err) => {
                error!(error = %err, "Failed to create PubMed client");
                return Ok(());
            }
        };

        debug!(query = %self.query, "Starting paper fetching");
        let outcome = collect_papers(&client, &AffiliationClassifier::new(), &self.query).await;

        if outcome.has_no_ids() {
            warn!("No PubMed IDs found for the given query.");
        }

        let rows = papers_to_rows(outcome.papers());
        let destination = ReportDestination::from_path(self.file.clone());
        if let Err(err) = write_report(&rows, &destination) {
            error!(destination = %destination, error = %err, "Error writing results");
        }

        debug!("Program finished.");
        Ok(())
    }
}
