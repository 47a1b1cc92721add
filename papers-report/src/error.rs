use std::{io, result};

use thiserror::Error;

/// Error types for writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV serialization or output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Destination could not be opened or flushed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, ReportError>;
