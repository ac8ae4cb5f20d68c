use crate::shared::Result;

/// File name of the package index inside a CRAN repository directory
pub const INDEX_FILE_NAME: &str = "PACKAGES";

/// IndexFetcher port for retrieving a repository's package index
///
/// This port abstracts where the `PACKAGES` text comes from
/// (a CRAN mirror over HTTP, a local mirror directory, a test fixture).
pub trait IndexFetcher {
    /// Fetches the full text of `PACKAGES` below the repository base URL
    ///
    /// # Arguments
    /// * `cran_url` - Repository base URL, e.g. `https://cran.r-project.org/src/contrib/`
    ///
    /// # Errors
    /// Returns an error if the index cannot be retrieved. Callers treat
    /// this as fatal; implementations do not retry.
    fn fetch_index(&self, cran_url: &str) -> Result<String>;
}

impl<T: IndexFetcher + ?Sized> IndexFetcher for Box<T> {
    fn fetch_index(&self, cran_url: &str) -> Result<String> {
        (**self).fetch_index(cran_url)
    }
}

/// Location of `PACKAGES` below a repository base URL or directory
pub fn index_url(cran_url: &str) -> String {
    if cran_url.ends_with('/') {
        format!("{}{}", cran_url, INDEX_FILE_NAME)
    } else {
        format!("{}/{}", cran_url, INDEX_FILE_NAME)
    }
}
