#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Report
//!
//! Formats classified papers as a six-column table and writes it as CSV to
//! standard output or a file.

pub mod error;
pub mod row;
pub mod writer;

// Re-export main types for convenience
pub use error::{ReportError, Result};
pub use row::{papers_to_rows, ReportRow, COLUMNS};
pub use writer::{write_report, write_rows, ReportDestination, ReportOutcome};
