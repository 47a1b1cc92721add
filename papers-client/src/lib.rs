#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Client
//!
//! An async client for the two NCBI E-utilities endpoints this project needs
//! (ESearch and ESummary) and the pipeline that turns a query into classified
//! papers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::{collect_papers, ClientConfig, PipelineOutcome, PubMedClient};
//! use papers_parser::AffiliationClassifier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::with_config(ClientConfig::new().with_max_results(5))?;
//!     let classifier = AffiliationClassifier::new();
//!
//!     match collect_papers(&client, &classifier, "mRNA vaccine").await {
//!         PipelineOutcome::Papers(papers) => {
//!             for paper in papers {
//!                 println!("{}: {:?}", paper.pmid, paper.non_academic_authors);
//!             }
//!         }
//!         other => println!("nothing to report: {:?}", other),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types for convenience
pub use client::PubMedClient;
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pipeline::{collect_papers, PipelineOutcome};
