/// Every placeholder value the recipe templates need for one package
///
/// Built once by `RecipeFieldBuilder` and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    /// conda package name, e.g. `r-xtable`
    pub package_name: String,
    /// Package name as spelled in the CRAN index, e.g. `xtable`
    pub cran_package_name: String,
    /// Version as published on CRAN, e.g. `1.7-1`
    pub cran_version: String,
    /// Version with `-` replaced by `_`, e.g. `1.7_1`
    pub conda_version: String,
    /// Source tarball name
    pub filename: String,
    /// Source tarball URL
    pub source_url: String,
    pub license: String,
    /// `# Suggests: ...` comment line, or empty
    pub suggests: String,
    /// Requirement list items shared by the build and run sections
    pub depends: String,
    /// `home:` line of the about section
    pub home: String,
    /// `summary:` line of the about section
    pub summary: String,
    /// The CRAN record, one `# ` comment per line
    pub cran_metadata: String,
}
