use cran_skeleton::prelude::*;
use std::path::{Path, PathBuf};

/// Mock RecipeWriter for testing that keeps recipes in memory
#[derive(Default, Clone)]
pub struct MockRecipeWriter {
    pub recipes: std::sync::Arc<std::sync::Mutex<Vec<(String, Vec<RecipeFile>)>>>,
}

impl MockRecipeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipe_names(&self) -> Vec<String> {
        self.recipes
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn file(&self, recipe_name: &str, file_name: &str) -> Option<String> {
        self.recipes
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == recipe_name)
            .and_then(|(_, files)| files.iter().find(|f| f.name == file_name))
            .map(|f| f.content.clone())
    }
}

impl RecipeWriter for MockRecipeWriter {
    fn write_recipe(
        &self,
        output_dir: &Path,
        recipe_name: &str,
        files: &[RecipeFile],
    ) -> Result<PathBuf> {
        self.recipes
            .lock()
            .unwrap()
            .push((recipe_name.to_string(), files.to_vec()));
        Ok(output_dir.join(recipe_name))
    }
}
