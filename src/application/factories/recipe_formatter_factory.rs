use crate::adapters::outbound::formatters::{BldBatFormatter, BuildShFormatter, MetaYamlFormatter};
use crate::ports::outbound::RecipeFormatter;

/// Factory for creating the formatters that make up a conda recipe
pub struct RecipeFormatterFactory;

impl RecipeFormatterFactory {
    /// Creates one formatter per recipe file: `meta.yaml`, `build.sh`, `bld.bat`
    ///
    /// # Examples
    /// ```
    /// use cran_skeleton::application::factories::RecipeFormatterFactory;
    ///
    /// let names: Vec<&str> = RecipeFormatterFactory::all()
    ///     .iter()
    ///     .map(|f| f.file_name())
    ///     .collect();
    /// assert_eq!(names, vec!["meta.yaml", "build.sh", "bld.bat"]);
    /// ```
    pub fn all() -> Vec<Box<dyn RecipeFormatter>> {
        vec![
            Box::new(MetaYamlFormatter::new()),
            Box::new(BuildShFormatter::new()),
            Box::new(BldBatFormatter::new()),
        ]
    }
}
