use std::result;

use papers_parser::ParseError;
use thiserror::Error;

/// Error types for PubMed client operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Whether the request never produced a usable HTTP response
    ///
    /// An in-band `<ERROR>` (reported as status 200) arrived intact and is not
    /// a transport failure.
    pub fn is_transport(&self) -> bool {
        match self {
            PubMedError::RequestError(_) => true,
            PubMedError::ApiError { status, .. } => *status != 200,
            PubMedError::Parse(_) => false,
        }
    }

    /// Whether the response arrived but was not well-formed XML
    pub fn is_parse(&self) -> bool {
        matches!(self, PubMedError::Parse(_))
    }
}
