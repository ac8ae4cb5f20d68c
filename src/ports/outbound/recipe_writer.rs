use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A rendered file of a recipe, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFile {
    pub name: String,
    pub content: String,
}

impl RecipeFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// RecipeWriter port for persisting a rendered recipe
pub trait RecipeWriter {
    /// Writes all files of one recipe into `<output_dir>/<recipe_name>/`
    ///
    /// # Arguments
    /// * `output_dir` - Directory receiving one sub-directory per recipe
    /// * `recipe_name` - conda package name, used as the directory name
    /// * `files` - Rendered recipe files
    ///
    /// # Returns
    /// The path of the recipe directory
    ///
    /// # Errors
    /// Returns an error if the recipe cannot be written. Implementations
    /// must not leave a partially written recipe directory behind.
    fn write_recipe(
        &self,
        output_dir: &Path,
        recipe_name: &str,
        files: &[RecipeFile],
    ) -> Result<PathBuf>;
}
