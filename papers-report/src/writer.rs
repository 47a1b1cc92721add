//! CSV output to standard output or a file

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{info, instrument};

use crate::error::Result;
use crate::row::ReportRow;

/// Where the report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stdout,
    /// Created if missing, truncated otherwise
    File(PathBuf),
}

impl ReportDestination {
    /// A file when a path is given, standard output otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(ReportDestination::Stdout, ReportDestination::File)
    }
}

impl fmt::Display for ReportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDestination::Stdout => f.write_str("standard output"),
            ReportDestination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What [`write_report`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// There were no rows; the destination was not touched
    NothingToWrite,
    Written { rows: usize },
}

/// Write the header and `rows` as comma-separated values
pub fn write_rows<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report to `destination`
///
/// # Example
///
/// ```
/// use papers_report::{write_report, ReportDestination, ReportOutcome};
///
/// let outcome = write_report(&[], &ReportDestination::Stdout)?;
/// assert_eq!(outcome, ReportOutcome::NothingToWrite);
/// # Ok::<(), papers_report::ReportError>(())
/// ```
#[instrument(skip(rows), fields(rows = rows.len(), destination = %destination))]
pub fn write_report(rows: &[ReportRow], destination: &ReportDestination) -> Result<ReportOutcome> {
    if rows.is_empty() {
        info!("No data to write.");
        return Ok(ReportOutcome::NothingToWrite);
    }

    match destination {
        ReportDestination::File(path) => {
            info!("Writing results to {}...", path.display());
            write_rows(rows, File::create(path)?)?;
            info!("Results successfully saved to {}", path.display());
        }
        ReportDestination::Stdout => {
            write_rows(rows, io::stdout().lock())?;
        }
    }

    Ok(ReportOutcome::Written { rows: rows.len() })
}
