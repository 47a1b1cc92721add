//! Client configuration

use std::time::Duration;

/// Default NCBI E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Number of identifiers requested from ESearch unless configured otherwise
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use papers_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_tool("get-papers-list")
///     .with_debug(true);
///
/// assert_eq!(config.max_results, 10);
/// assert!(config.debug);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key, sent as `api_key`
    pub api_key: Option<String>,
    /// Contact e-mail, sent as `email`
    pub email: Option<String>,
    /// Tool name, sent as `tool`
    pub tool: Option<String>,
    /// Override for the E-utilities base URL (used by tests)
    pub base_url: Option<String>,
    /// Custom `User-Agent` header
    pub user_agent: Option<String>,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// `retmax` for ESearch
    pub max_results: usize,
    /// Log raw response bodies that fail to parse
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            base_url: None,
            user_agent: None,
            timeout: None,
            max_results: DEFAULT_MAX_RESULTS,
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Base URL without a trailing slash
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("get-papers-list/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Identification parameters appended to every E-utilities request
    pub fn build_api_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(api_key) = &self.api_key {
            params.push(("api_key", api_key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(tool) = &self.tool {
            params.push(("tool", tool.clone()));
        }

        params
    }
}
