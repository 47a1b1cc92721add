use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;

/// Log filter for `--debug`; dependencies stay at `info`
const DEBUG_FILTER: &str =
    "info,get_papers_list=debug,papers_client=debug,papers_parser=debug,papers_report=debug";

#[derive(Parser)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetch research papers from PubMed and identify authors from pharmaceutical/biotech companies",
    long_about = "Searches PubMed for a query, fetches the matching paper summaries and reports \
                  the authors whose affiliation names a company, as CSV on the console or in a file"
)]
struct Cli {
    #[command(flatten)]
    fetch: commands::fetch::Fetch,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities
    #[arg(long)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long)]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, default_value = "get-papers-list")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Report goes to stdout, so diagnostics go to stderr
    let filter = if cli.debug { DEBUG_FILTER } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(EnvFilter::new(filter))
        .init();

    let config = commands::create_client_config(
        cli.api_key.as_deref(),
        cli.email.as_deref(),
        &cli.tool,
        cli.debug,
    );

    cli.fetch.execute_with_config(config).await
}
