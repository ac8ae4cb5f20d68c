use crate::recipe_generation::domain::{
    CranField, PackageRecord, ResolvedDependency, ResolvedDependencySet, VersionConstraint,
};
use crate::recipe_generation::policies::{BasePackagePolicy, CondaNaming};
use crate::recipe_generation::services::DependencyParser;
use crate::shared::error::SkeletonError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashSet};

/// Fields whose entries become conda requirements, in resolution order
pub const DEPENDENCY_FIELDS: [CranField; 3] =
    [CranField::Depends, CranField::Imports, CranField::LinkingTo];

/// DependencyResolver service for translating CRAN dependencies to conda requirements
///
/// Merges `Depends`, `Imports` and `LinkingTo`, drops R base packages,
/// renames to conda names and orders the result: `r` first, then the rest
/// by their CRAN name.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolves the dependencies declared by a package record
    ///
    /// # Arguments
    /// * `package` - Package name used in error messages
    /// * `record` - The package's index record
    ///
    /// # Errors
    /// Returns `UnsupportedDependencySyntax` naming the package and token for
    /// the first token that cannot be parsed
    pub fn resolve(package: &str, record: &PackageRecord) -> Result<ResolvedDependencySet> {
        let sources: Vec<&str> = DEPENDENCY_FIELDS
            .iter()
            .filter_map(|field| record.get(field))
            .collect();
        Self::resolve_fields(package, &sources)
    }

    /// Resolves raw comma-separated dependency field values
    ///
    /// Identical tokens across sources collapse into one. When the same name
    /// carries different constraints, the last one parsed in source order
    /// is kept.
    pub fn resolve_fields(package: &str, sources: &[&str]) -> Result<ResolvedDependencySet> {
        let mut seen_tokens = HashSet::new();
        let mut constraints: BTreeMap<String, Option<VersionConstraint>> = BTreeMap::new();

        let tokens = sources
            .iter()
            .flat_map(|source| source.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        for token in tokens {
            if !seen_tokens.insert(token) {
                continue;
            }

            let dependency = DependencyParser::parse(token).map_err(|e| {
                SkeletonError::UnsupportedDependencySyntax {
                    package: package.to_string(),
                    token: token.to_string(),
                    reason: e.to_string(),
                }
            })?;

            let (name, constraint) = dependency.into_parts();
            constraints.insert(name, constraint);
        }

        let mut resolved = Vec::with_capacity(constraints.len());
        for (name, constraint) in constraints {
            if BasePackagePolicy::is_base_package(&name) {
                continue;
            }

            let conda_name = CondaNaming::package_name(&name);
            let is_host_runtime = CondaNaming::is_host_runtime(&name);
            let dependency = ResolvedDependency::new(name, conda_name, constraint);

            if is_host_runtime {
                resolved.insert(0, dependency);
            } else {
                resolved.push(dependency);
            }
        }

        Ok(ResolvedDependencySet::new(resolved))
    }
}
