use std::path::PathBuf;

/// A recipe written by the use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecipe {
    /// Package name as spelled in the CRAN index
    pub cran_package_name: String,
    /// conda package name (also the recipe directory name)
    pub package_name: String,
    /// conda version written to meta.yaml
    pub conda_version: String,
    /// Recipe directory
    pub path: PathBuf,
}

/// RecipeResponse - Internal response DTO from the recipe generation use case
#[derive(Debug, Clone, Default)]
pub struct RecipeResponse {
    /// Recipes in the order they were written
    pub recipes: Vec<GeneratedRecipe>,
}

impl RecipeResponse {
    pub fn new(recipes: Vec<GeneratedRecipe>) -> Self {
        Self { recipes }
    }
}
