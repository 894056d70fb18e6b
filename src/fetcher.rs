use log::debug;
use reqwest::blocking::Client;

use crate::models::PricingResponse;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Issues a single GET against the pricing endpoint and decodes the body.
///
/// Connection failures, non-2xx statuses and bodies that don't match
/// [`PricingResponse`] all come back as a `reqwest::Error`.
pub fn fetch_offers(url: &str) -> Result<PricingResponse, reqwest::Error> {
    let client = Client::builder().build()?;

    debug!("GET {url}");
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?
        .error_for_status()?;

    debug!("pricing endpoint answered {}", response.status());
    response.json()
}
