use crate::ports::outbound::{RecipeFile, RecipeWriter};
use crate::shared::error::SkeletonError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of the staging directory a recipe is assembled in
const STAGING_PREFIX: &str = ".cran-skeleton-";

/// FileSystemRecipeWriter adapter for writing recipes to disk
///
/// Implements the RecipeWriter port. Files are written into a staging
/// directory next to the final location and moved into place with a
/// single rename, so a failed write never leaves a partial recipe.
pub struct FileSystemRecipeWriter;

impl FileSystemRecipeWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the output directory exists, is a directory and is not a symlink
    pub fn validate_output_dir(output_dir: &Path) -> Result<()> {
        let invalid = |reason: String| SkeletonError::InvalidOutputDir {
            path: output_dir.to_path_buf(),
            reason,
        };

        if !output_dir.exists() {
            return Err(invalid("Directory does not exist".to_string()).into());
        }

        validate_not_symlink(output_dir, "write").map_err(|e| invalid(e.to_string()))?;

        if !output_dir.is_dir() {
            return Err(invalid("Not a directory".to_string()).into());
        }

        Ok(())
    }

    /// Rejects names that would escape the output directory
    fn validate_component(name: &str, path: &Path) -> Result<()> {
        if name.is_empty()
            || name == "."
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(SkeletonError::RecipeWriteError {
                path: path.to_path_buf(),
                details: format!("Security: '{}' is not a valid file name", name),
            }
            .into());
        }
        Ok(())
    }

    fn write_error(path: &Path, details: impl ToString) -> anyhow::Error {
        SkeletonError::RecipeWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }

    #[cfg(unix)]
    fn make_world_readable(dir: &Path) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        // Staging directories are created private (0700)
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755))
    }

    #[cfg(not(unix))]
    fn make_world_readable(_dir: &Path) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for FileSystemRecipeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeWriter for FileSystemRecipeWriter {
    fn write_recipe(
        &self,
        output_dir: &Path,
        recipe_name: &str,
        files: &[RecipeFile],
    ) -> Result<PathBuf> {
        Self::validate_output_dir(output_dir)?;

        let recipe_dir = output_dir.join(recipe_name);
        Self::validate_component(recipe_name, &recipe_dir)?;

        if fs::symlink_metadata(&recipe_dir).is_ok() {
            return Err(Self::write_error(
                &recipe_dir,
                "Recipe directory already exists; remove it first to regenerate the recipe",
            ));
        }

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(output_dir)
            .map_err(|e| Self::write_error(&recipe_dir, e))?;

        for file in files {
            Self::validate_component(&file.name, &recipe_dir)?;
            fs::write(staging.path().join(&file.name), &file.content)
                .map_err(|e| Self::write_error(&recipe_dir.join(&file.name), e))?;
        }

        Self::make_world_readable(staging.path()).map_err(|e| Self::write_error(&recipe_dir, e))?;

        // Dropping `staging` afterwards is a no-op once the directory has moved
        fs::rename(staging.path(), &recipe_dir).map_err(|e| Self::write_error(&recipe_dir, e))?;

        Ok(recipe_dir)
    }
}
