use crate::ports::outbound::index_fetcher::{index_url, IndexFetcher};
use crate::shared::error::SkeletonError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_INDEX_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// URL scheme accepted for local repositories
const FILE_SCHEME: &str = "file://";

/// LocalIndexReader adapter for reading `PACKAGES` from a local mirror
///
/// Implements the IndexFetcher port for a repository directory given
/// either as a plain path or as a `file://` URL.
pub struct LocalIndexReader;

impl LocalIndexReader {
    pub fn new() -> Self {
        Self
    }

    /// Whether a repository location refers to the local file system
    pub fn handles(cran_url: &str) -> bool {
        cran_url.starts_with(FILE_SCHEME) || !cran_url.contains("://")
    }

    fn index_path(cran_url: &str) -> PathBuf {
        let location = cran_url.strip_prefix(FILE_SCHEME).unwrap_or(cran_url);
        PathBuf::from(index_url(location))
    }

    /// Safely read the index with security checks:
    /// - Reject symbolic links
    /// - Validate it is a regular file
    /// - Check file size limits
    fn safe_read_index(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "PACKAGES")?;

        let file_size = fs::metadata(path)?.len();
        validate_file_size(file_size, path, MAX_INDEX_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    }
}

impl Default for LocalIndexReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexFetcher for LocalIndexReader {
    fn fetch_index(&self, cran_url: &str) -> Result<String> {
        let path = Self::index_path(cran_url);

        self.safe_read_index(&path).map_err(|e| {
            SkeletonError::IndexFetchError {
                url: path.display().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
