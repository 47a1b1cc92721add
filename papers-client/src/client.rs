//! ESearch and ESummary requests

use papers_parser::{parse_esearch_xml, ParseError, XmlNode};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};

/// Client for the PubMed ESearch and ESummary endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Errors
    ///
    /// Returns `PubMedError::RequestError` if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_max_results(10);
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), papers_client::PubMedError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.effective_base_url().to_string(),
            config,
        })
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return the matching PMIDs
    ///
    /// At most [`ClientConfig::max_results`] identifiers are requested. A blank
    /// query returns an empty list without contacting the server.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - On a non-success status, or an in-band `<ERROR>`
    ///   with no identifiers
    /// * `PubMedError::Parse` - If the response is not well-formed XML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let pmids = client.search_ids("covid-19 vaccine clinical trials").await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = self.config.max_results))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let retmax = self.config.max_results.to_string();
        let body = self
            .get_text(
                "esearch.fcgi",
                &[
                    ("db", "pubmed"),
                    ("term", query),
                    ("retmax", retmax.as_str()),
                    ("retmode", "xml"),
                ],
            )
            .await?;

        let result =
            parse_esearch_xml(&body).map_err(|e| self.parse_failure("ESearch", &body, e))?;

        if let Some(error_msg) = result.error {
            if result.ids.is_empty() {
                return Err(PubMedError::ApiError {
                    status: 200,
                    message: format!("NCBI ESearch API error: {}", error_msg),
                });
            }
            warn!(error = %error_msg, "ESearch reported an error alongside results");
        }

        if let Some(total) = result.count.filter(|&total| total > self.config.max_results) {
            warn!(
                total,
                limit = self.config.max_results,
                "Query matched more articles than requested; using the first page only"
            );
        }

        debug!(pmids = result.ids.len(), "Found PubMed IDs");
        Ok(result.ids)
    }

    /// Fetch ESummary documents for the given PMIDs in a single request
    ///
    /// Returns `Ok(None)` without a request when `pmids` is empty, otherwise the
    /// root element of the `eSummaryResult` document.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - On a non-success status
    /// * `PubMedError::Parse` - If the response is not well-formed XML
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_summaries(&self, pmids: &[String]) -> Result<Option<XmlNode>> {
        if pmids.is_empty() {
            return Ok(None);
        }

        let id_list = pmids.join(",");
        let body = self
            .get_text(
                "esummary.fcgi",
                &[("db", "pubmed"), ("id", id_list.as_str()), ("retmode", "xml")],
            )
            .await?;

        let root =
            XmlNode::parse(&body).map_err(|e| self.parse_failure("ESummary", &body, e))?;
        Ok(Some(root))
    }

    /// Issue a GET against an E-utilities endpoint and return the body
    async fn get_text(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let api_params = self.config.build_api_params();
        let query = params
            .iter()
            .copied()
            .chain(api_params.iter().map(|(key, value)| (*key, value.as_str())))
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}/{}?{}", self.base_url, endpoint, query);

        debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received API response");
        if !status.is_success() {
            warn!("API request failed with status: {}", status);
            return Err(PubMedError::ApiError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn parse_failure(&self, api: &str, body: &str, err: ParseError) -> PubMedError {
        warn!(api, error = %err, "Failed to parse XML response");
        if self.config.debug {
            debug!(api, body, "Problematic XML");
        }
        PubMedError::from(err)
    }
}
