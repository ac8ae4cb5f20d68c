use crate::adapters::outbound::filesystem::LocalIndexReader;
use crate::adapters::outbound::network::CranIndexClient;
use crate::ports::outbound::IndexFetcher;
use crate::shared::Result;

/// Factory for choosing how the CRAN index is fetched
///
/// `http(s)://` repositories are fetched over the network; plain paths
/// and `file://` URLs are read from a local mirror.
pub struct IndexFetcherFactory;

impl IndexFetcherFactory {
    /// Creates the fetcher matching the repository location
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn create(cran_url: &str) -> Result<Box<dyn IndexFetcher>> {
        if LocalIndexReader::handles(cran_url) {
            Ok(Box::new(LocalIndexReader::new()))
        } else {
            Ok(Box::new(CranIndexClient::new()?))
        }
    }
}
