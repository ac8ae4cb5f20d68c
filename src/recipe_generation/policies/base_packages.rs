/// Packages shipped with every R installation
///
/// Taken from R's source tree (`share/make/vars.mk`). These are never
/// declared as conda requirements since installing `r` provides them.
pub const R_BASE_PACKAGE_NAMES: &[&str] = &[
    "base",
    "tools",
    "utils",
    "grDevices",
    "graphics",
    "stats",
    "datasets",
    "methods",
    "grid",
    "splines",
    "stats4",
    "tcltk",
    "compiler",
    "parallel",
];

/// BasePackagePolicy decides which CRAN dependencies are left out of recipes
pub struct BasePackagePolicy;

impl BasePackagePolicy {
    /// Whether `name` is an R base package (case-sensitive, as R is)
    pub fn is_base_package(name: &str) -> bool {
        R_BASE_PACKAGE_NAMES.contains(&name)
    }
}
