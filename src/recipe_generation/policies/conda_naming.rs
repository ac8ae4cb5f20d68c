/// Name of the R interpreter as it appears in CRAN dependency fields
pub const HOST_RUNTIME: &str = "R";

/// conda package providing the R interpreter
const HOST_RUNTIME_CONDA_NAME: &str = "r";

/// Prefix conda uses for packages built from CRAN
const CRAN_PREFIX: &str = "r-";

/// CondaNaming policy for translating CRAN names and versions
///
/// conda package names are lower-case and CRAN packages live under the
/// `r-` namespace. conda versions cannot contain `-`; `_` compares like `.`.
pub struct CondaNaming;

impl CondaNaming {
    pub fn is_host_runtime(cran_name: &str) -> bool {
        cran_name == HOST_RUNTIME
    }

    /// conda package name for a CRAN package name
    pub fn package_name(cran_name: &str) -> String {
        if Self::is_host_runtime(cran_name) {
            HOST_RUNTIME_CONDA_NAME.to_string()
        } else {
            format!("{}{}", CRAN_PREFIX, cran_name.to_lowercase())
        }
    }

    /// conda version string for a CRAN version string
    pub fn version(cran_version: &str) -> String {
        cran_version.replace('-', "_")
    }
}
