use anyhow::{Context, Result};
use reqwest::blocking::Client;

/// The statistics page we scrape.
pub const SOURCE_URL: &str = "https://www.mohfw.gov.in/";

/// Fetch `url` with a single blocking GET and return the body as text.
///
/// A non-2xx status is an error; there is no retry and no timeout beyond
/// what the client itself enforces.
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("{} returned an error status", url))?;
    resp.text()
        .with_context(|| format!("failed to read body of {}", url))
}
