// Provider directory export
//
// Reads the provider search results list, fetches each provider's detail
// record from the directory API and writes the flattened rows to CSV.
// Running without flags uses the historical file names and endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use providerscrape::utils::{
    DEFAULT_COUNTRY, DEFAULT_ENDPOINT_TEMPLATE, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use providerscrape::ScrapeConfig;

#[derive(Debug, Parser)]
#[command(name = "provider-scrape")]
#[command(about = "Export service-provider details from the Workforce Australia directory to CSV")]
#[command(version)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH, help = "JSON file with the provider search results")]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, help = "CSV file to write")]
    output: PathBuf,

    #[arg(long, default_value = DEFAULT_ENDPOINT_TEMPLATE, help = "Detail endpoint with {site_code} and {provider_type} placeholders")]
    endpoint: String,

    #[arg(short, long, help = "Only examine the first N entries of the input list")]
    limit: Option<usize>,

    #[arg(long, default_value_t = 0, help = "Pause after each detail request, in milliseconds")]
    delay_ms: u64,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, help = "Timeout for each detail request, in seconds")]
    timeout_secs: u64,

    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL, help = "Log a running total every N providers")]
    progress_every: usize,

    #[arg(long, default_value = DEFAULT_COUNTRY, help = "Value for the country column")]
    country: String,
}

impl Cli {
    fn into_config(self) -> Result<ScrapeConfig> {
        ScrapeConfig::builder()
            .input_path(self.input)
            .output_path(self.output)
            .endpoint_template(self.endpoint)
            .limit(self.limit)
            .request_delay_ms(Some(self.delay_ms))
            .request_timeout_secs(self.timeout_secs)
            .progress_interval(self.progress_every)
            .country(self.country)
            .build()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config().context("Invalid configuration")?;
    info!(
        "Reading providers from {} and writing to {}",
        config.input_path().display(),
        config.output_path().display()
    );

    let report = providerscrape::scrape(config).await?;

    info!(
        "{} providers written, {} fetch failures, {} entries without identifiers",
        report.rows_written, report.fetch_failures, report.skipped_missing_identifier
    );
    Ok(())
}
