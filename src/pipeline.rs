use std::path::PathBuf;

use log::{debug, error, info};

use crate::error::PipelineError;
use crate::{archiver, fetcher, parser};

pub const PRICING_URL: &str =
    "https://azure.microsoft.com/api/v2/pricing/virtual-machines-base/calculator/";
pub const TARGET_REGION: &str = "us-east-2";
pub const OUTPUT_FILE: &str = "azure.json";

/// Fixed inputs of a run. `Default` gives the production endpoint, region
/// and output file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub region: String,
    pub output_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: PRICING_URL.to_string(),
            region: TARGET_REGION.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

/// Fetches the catalog, keeps the offers priced in the configured region
/// and writes them out. Returns the number of records written.
///
/// A fetch failure returns before the output file is touched.
pub fn run(settings: &Settings) -> Result<usize, PipelineError> {
    let response = fetcher::fetch_offers(&settings.url)?;
    debug!("received {} offers", response.offers.len());

    let records = parser::parse_offers(&response.offers, &settings.region);
    debug!("{} offers priced in {}", records.len(), settings.region);

    archiver::save_to_file(&records, &settings.output_path)?;
    Ok(records.len())
}

/// Runs the pipeline once and logs a single status line. Errors stop here.
pub fn run_and_report(settings: &Settings) -> bool {
    match run(settings) {
        Ok(_) => {
            info!("Data saved to {}", settings.output_path.display());
            true
        }
        Err(err) => {
            error!("{}", err.status_line());
            false
        }
    }
}
