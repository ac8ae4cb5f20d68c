pub mod cran_field;
pub mod dependency;
pub mod index_snapshot;
pub mod package_record;
pub mod recipe_fields;
pub mod resolved_dependencies;

pub use cran_field::CranField;
pub use dependency::{DependencySpec, VersionConstraint};
pub use index_snapshot::IndexSnapshot;
pub use package_record::PackageRecord;
pub use recipe_fields::RecipeFields;
pub use resolved_dependencies::{ResolvedDependency, ResolvedDependencySet};
