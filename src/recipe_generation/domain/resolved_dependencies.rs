use super::VersionConstraint;

/// A dependency translated to its conda name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    original_name: String,
    conda_name: String,
    constraint: Option<VersionConstraint>,
}

impl ResolvedDependency {
    pub fn new(
        original_name: String,
        conda_name: String,
        constraint: Option<VersionConstraint>,
    ) -> Self {
        Self {
            original_name,
            conda_name,
            constraint,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn conda_name(&self) -> &str {
        &self.conda_name
    }

    pub fn constraint(&self) -> Option<&VersionConstraint> {
        self.constraint.as_ref()
    }

    /// `name` or `name <relop><version>`, as it appears after `- ` in meta.yaml
    pub fn requirement_spec(&self) -> String {
        match &self.constraint {
            Some(constraint) => format!("{} {}", self.conda_name, constraint),
            None => self.conda_name.clone(),
        }
    }
}

/// Ordered, deduplicated dependencies of one package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDependencySet {
    dependencies: Vec<ResolvedDependency>,
}

impl ResolvedDependencySet {
    pub fn new(dependencies: Vec<ResolvedDependency>) -> Self {
        Self { dependencies }
    }

    pub fn dependencies(&self) -> &[ResolvedDependency] {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// YAML list items for a `requirements` section, one per line
    pub fn requirements_block(&self) -> String {
        self.dependencies
            .iter()
            .map(|dep| format!("    - {}", dep.requirement_spec()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
