use cran_skeleton::prelude::*;

/// Mock IndexFetcher for testing that serves a fixed index
pub struct MockIndexFetcher {
    pub content: String,
    pub should_fail: bool,
}

impl MockIndexFetcher {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl IndexFetcher for MockIndexFetcher {
    fn fetch_index(&self, _cran_url: &str) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock index fetch failure");
        }
        Ok(self.content.clone())
    }
}
