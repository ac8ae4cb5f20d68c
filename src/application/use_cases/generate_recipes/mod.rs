use crate::application::dto::{GeneratedRecipe, RecipeRequest, RecipeResponse};
use crate::ports::outbound::{IndexFetcher, ProgressReporter, RecipeFile, RecipeFormatter, RecipeWriter};
use crate::recipe_generation::domain::{IndexSnapshot, PackageRecord};
use crate::recipe_generation::policies::CondaNaming;
use crate::recipe_generation::services::{DependencyResolver, RecipeFieldBuilder, RecordParser};
use crate::shared::error::SkeletonError;
use crate::shared::Result;
use std::collections::HashSet;

/// GenerateRecipesUseCase - Core use case for conda recipe generation
///
/// This use case orchestrates the recipe generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `F` - IndexFetcher implementation
/// * `W` - RecipeWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateRecipesUseCase<F, W, PR> {
    index_fetcher: F,
    recipe_writer: W,
    progress_reporter: PR,
    formatters: Vec<Box<dyn RecipeFormatter>>,
}

impl<F, W, PR> GenerateRecipesUseCase<F, W, PR>
where
    F: IndexFetcher,
    W: RecipeWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateRecipesUseCase with injected dependencies
    pub fn new(
        index_fetcher: F,
        recipe_writer: W,
        progress_reporter: PR,
        formatters: Vec<Box<dyn RecipeFormatter>>,
    ) -> Self {
        Self {
            index_fetcher,
            recipe_writer,
            progress_reporter,
            formatters,
        }
    }

    /// Executes the recipe generation use case
    ///
    /// Packages are converted strictly in the order requested. A failure
    /// aborts the run; recipes written for earlier packages are kept.
    ///
    /// # Arguments
    /// * `request` - Repository location, output directory and package names
    ///
    /// # Returns
    /// RecipeResponse listing every recipe written
    pub fn execute(&self, request: RecipeRequest) -> Result<RecipeResponse> {
        // Step 1: Reject options that are not supported yet
        Self::validate_request(&request)?;

        // Step 2: Fetch and parse the index once for the whole run
        let snapshot = self.fetch_and_parse_index(&request.cran_url)?;

        // Step 3: Report unknown fields once per distinct key
        self.report_unknown_fields(&snapshot);

        // Step 4: Convert each requested package in order
        let recipes = self.generate_all(&snapshot, &request)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} recipe(s) in {}",
            recipes.len(),
            request.output_dir.display()
        ));

        Ok(RecipeResponse::new(recipes))
    }

    fn validate_request(request: &RecipeRequest) -> Result<()> {
        if request.package_version.is_some() {
            return Err(SkeletonError::UnsupportedFeature {
                feature: "Selecting a package version".to_string(),
            }
            .into());
        }

        if request.packages.is_empty() {
            anyhow::bail!("No packages requested");
        }

        Ok(())
    }

    /// Fetches the `PACKAGES` index and builds the snapshot, reporting progress
    ///
    /// # Arguments
    /// * `cran_url` - Repository base URL or local mirror location
    ///
    /// # Returns
    /// The parsed, read-only index
    fn fetch_and_parse_index(&self, cran_url: &str) -> Result<IndexSnapshot> {
        self.progress_reporter
            .report(&format!("📖 Fetching metadata from {}", cran_url));

        let index = self.index_fetcher.fetch_index(cran_url)?;
        let snapshot = RecordParser::parse_index(&index)?;

        self.progress_reporter
            .report(&format!("✅ Parsed {} package(s) from the index", snapshot.len()));

        Ok(snapshot)
    }

    fn report_unknown_fields(&self, snapshot: &IndexSnapshot) {
        for field in snapshot.unknown_fields() {
            self.progress_reporter
                .report_warning(&format!("⚠️  Warning: Unknown field '{}'", field));
        }
    }

    /// Runs the per-package pipeline for every requested package
    ///
    /// # Arguments
    /// * `snapshot` - Parsed index shared by all packages
    /// * `request` - Request holding the package list and output directory
    ///
    /// # Returns
    /// Recipes written, in request order
    fn generate_all(
        &self,
        snapshot: &IndexSnapshot,
        request: &RecipeRequest,
    ) -> Result<Vec<GeneratedRecipe>> {
        let total = request.packages.len();
        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(total);

        for (position, package) in request.packages.iter().enumerate() {
            let record = snapshot
                .lookup(package)
                .ok_or_else(|| SkeletonError::UnknownPackage {
                    package: package.clone(),
                })?;

            let conda_name = CondaNaming::package_name(record.name().unwrap_or(package));
            if seen.insert(conda_name) {
                recipes.push(self.generate_one(package, record, request)?);
            } else {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: '{}' requested more than once, skipping",
                    package
                ));
            }

            self.progress_reporter
                .report_progress(position + 1, total, Some(package));
        }

        Ok(recipes)
    }

    /// Resolves, renders and writes the recipe for one package
    fn generate_one(
        &self,
        package: &str,
        record: &PackageRecord,
        request: &RecipeRequest,
    ) -> Result<GeneratedRecipe> {
        let dependencies = DependencyResolver::resolve(package, record)?;
        let fields = RecipeFieldBuilder::build(record, &dependencies, &request.cran_url)?;

        self.progress_reporter.report(&format!(
            "📝 Writing recipe for {} ({})",
            fields.cran_package_name, fields.package_name
        ));

        let files: Vec<RecipeFile> = self
            .formatters
            .iter()
            .map(|formatter| RecipeFile::new(formatter.file_name(), formatter.render(&fields)))
            .collect();

        let path = self
            .recipe_writer
            .write_recipe(&request.output_dir, &fields.package_name, &files)?;

        Ok(GeneratedRecipe {
            cran_package_name: fields.cran_package_name,
            package_name: fields.package_name,
            conda_version: fields.conda_version,
            path,
        })
    }
}

#[cfg(test)]
mod tests;
