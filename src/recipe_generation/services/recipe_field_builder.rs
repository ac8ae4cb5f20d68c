use crate::recipe_generation::domain::{
    CranField, PackageRecord, RecipeFields, ResolvedDependencySet,
};
use crate::recipe_generation::policies::CondaNaming;
use crate::shared::error::SkeletonError;
use crate::shared::Result;

/// License used when a record has no `License` field
const DEFAULT_LICENSE: &str = "None";

/// RecipeFieldBuilder service for assembling template values for one package
pub struct RecipeFieldBuilder;

impl RecipeFieldBuilder {
    /// Builds the recipe fields for a package record
    ///
    /// # Arguments
    /// * `record` - The package's index record
    /// * `dependencies` - Resolved requirements, shared by build and run
    /// * `cran_url` - Repository base URL the source tarball is served from
    ///
    /// # Errors
    /// Returns `MissingField` if the record lacks `Package` or `Version`
    pub fn build(
        record: &PackageRecord,
        dependencies: &ResolvedDependencySet,
        cran_url: &str,
    ) -> Result<RecipeFields> {
        let cran_package_name = record
            .name()
            .ok_or_else(|| SkeletonError::MissingField {
                package: "<unnamed>".to_string(),
                field: CranField::Package.to_string(),
            })?
            .to_string();
        let cran_version = record
            .version()
            .ok_or_else(|| SkeletonError::MissingField {
                package: cran_package_name.clone(),
                field: CranField::Version.to_string(),
            })?
            .to_string();

        let filename = format!("{}_{}.tar.gz", cran_package_name, cran_version);
        let source_url = Self::join_url(cran_url, &filename);

        Ok(RecipeFields {
            package_name: CondaNaming::package_name(&cran_package_name),
            conda_version: CondaNaming::version(&cran_version),
            license: Self::license(record),
            suggests: record
                .get(&CranField::Suggests)
                .map(|suggests| format!("# Suggests: {}", suggests))
                .unwrap_or_default(),
            depends: dependencies.requirements_block(),
            // The CRAN index carries no homepage
            home: "# home:".to_string(),
            summary: Self::summary(record)?,
            cran_metadata: Self::cran_metadata(record),
            cran_package_name,
            cran_version,
            filename,
            source_url,
        })
    }

    /// `License` plus annotations from the license flag fields
    fn license(record: &PackageRecord) -> String {
        let mut license = record
            .get(&CranField::License)
            .unwrap_or(DEFAULT_LICENSE)
            .to_string();
        if record.contains(&CranField::LicenseIsFoss) {
            license.push_str(" (FOSS)");
        }
        if record.get(&CranField::LicenseRestrictsUse) == Some("yes") {
            license.push_str(" (Restricts use)");
        }
        license
    }

    /// `summary:` line from `Title`, commented out when there is none
    fn summary(record: &PackageRecord) -> Result<String> {
        match record.get(&CranField::Title) {
            Some(title) => {
                let quoted = serde_yaml_ng::to_string(title)?;
                Ok(format!("summary: {}", quoted.trim_end()))
            }
            None => Ok("# summary:".to_string()),
        }
    }

    fn cran_metadata(record: &PackageRecord) -> String {
        record
            .original_lines()
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| format!("# {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn join_url(base: &str, filename: &str) -> String {
        if base.ends_with('/') {
            format!("{}{}", base, filename)
        } else {
            format!("{}/{}", base, filename)
        }
    }
}
