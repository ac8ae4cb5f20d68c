use std::path::PathBuf;

/// RecipeRequest - Internal request DTO for the recipe generation use case
#[derive(Debug, Clone)]
pub struct RecipeRequest {
    /// Repository base URL or local mirror directory, always ending in `/`
    pub cran_url: String,
    /// Directory receiving one sub-directory per recipe
    pub output_dir: PathBuf,
    /// CRAN package names, converted in this order
    pub packages: Vec<String>,
    /// Requested package version (not supported yet)
    pub package_version: Option<String>,
}

impl RecipeRequest {
    pub fn new(
        cran_url: impl Into<String>,
        output_dir: PathBuf,
        packages: Vec<String>,
        package_version: Option<String>,
    ) -> Self {
        let mut cran_url = cran_url.into();
        if !cran_url.ends_with('/') {
            cran_url.push('/');
        }

        Self {
            cran_url,
            output_dir,
            packages,
            package_version,
        }
    }
}
