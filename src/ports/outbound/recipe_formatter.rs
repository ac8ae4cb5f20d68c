use crate::recipe_generation::domain::RecipeFields;

/// RecipeFormatter port for rendering one file of a conda recipe
///
/// Each implementation owns one template (meta.yaml, build.sh, bld.bat).
pub trait RecipeFormatter {
    /// Name of the file inside the recipe directory
    fn file_name(&self) -> &'static str;

    /// Renders the file content from the package's recipe fields
    fn render(&self, fields: &RecipeFields) -> String;
}
