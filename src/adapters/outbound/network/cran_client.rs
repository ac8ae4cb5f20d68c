use crate::ports::outbound::index_fetcher::{index_url, IndexFetcher};
use crate::shared::error::SkeletonError;
use crate::shared::Result;
use std::time::Duration;

/// Upper bound for downloading the whole index
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CranIndexClient adapter for fetching `PACKAGES` from a CRAN mirror
///
/// Implements the IndexFetcher port with a blocking reqwest client: the
/// index is fetched once per run before any package is converted, so
/// nothing else could proceed concurrently.
pub struct CranIndexClient {
    client: reqwest::blocking::Client,
}

impl CranIndexClient {
    /// Creates a new client with default timeout and user agent
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cran-skeleton/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

// Note: no Default implementation, since client construction can fail.

impl IndexFetcher for CranIndexClient {
    fn fetch_index(&self, cran_url: &str) -> Result<String> {
        let url = index_url(cran_url);

        let fetch_error = |details: String| SkeletonError::IndexFetchError {
            url: url.clone(),
            details,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("server returned status {}", response.status())).into());
        }

        let text = response.text().map_err(|e| fetch_error(e.to_string()))?;
        Ok(text)
    }
}
