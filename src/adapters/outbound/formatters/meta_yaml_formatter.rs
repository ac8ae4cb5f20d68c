use crate::ports::outbound::RecipeFormatter;
use crate::recipe_generation::domain::RecipeFields;

/// MetaYamlFormatter adapter for the recipe's `meta.yaml`
///
/// Builds the document as text rather than serializing it, since the
/// output is meant to be edited by hand and carries explanatory comments
/// plus the original CRAN record.
pub struct MetaYamlFormatter;

impl MetaYamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetaYamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormatter for MetaYamlFormatter {
    fn file_name(&self) -> &'static str {
        "meta.yaml"
    }

    fn render(&self, fields: &RecipeFields) -> String {
        format!(
            r#"package:
  name: {package_name}
  version: "{conda_version}"

source:
  fn: {filename}
  url: {source_url}
  # You can add a hash for the file here, like md5 or sha256
  # md5: 49448ba4863157652311cc5ea4fea3ea
  # patches:
   # List any patch files here
   # - fix.patch

# build:
  # If this is a new build for the same version, increment the build
  # number. If you do not include this key, it defaults to 0.
  # number: 1

{suggests}
requirements:
  build:
{depends}

  run:
{depends}

test:
  commands:
    # You can put additional test commands to be run here.
    - R -e "library('{cran_package_name}')"

  # You can also put a file called run_test.py, run_test.sh, or run_test.bat
  # in the recipe that will be run at test time.

  # requires:
    # Put any additional test requirements here.

about:
  {home}
  license: {license}
  {summary}

# The original CRAN metadata for this package was:

{cran_metadata}

# See
# https://docs.conda.io/projects/conda-build/ for
# more information about meta.yaml
"#,
            package_name = fields.package_name,
            conda_version = fields.conda_version,
            filename = fields.filename,
            source_url = fields.source_url,
            suggests = fields.suggests,
            depends = fields.depends,
            cran_package_name = fields.cran_package_name,
            home = fields.home,
            license = fields.license,
            summary = fields.summary,
            cran_metadata = fields.cran_metadata,
        )
    }
}
