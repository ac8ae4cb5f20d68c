use std::fmt;

/// Relational operator and version attached to a dependency, e.g. `>= 2.15.0`
///
/// An operator never appears without a version, so both live in one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionConstraint {
    relop: String,
    version: String,
}

impl VersionConstraint {
    pub fn new(relop: String, version: String) -> Self {
        Self { relop, version }
    }

    pub fn relop(&self) -> &str {
        &self.relop
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Renders as conda writes it: operator and version with no space between
impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.relop, self.version)
    }
}

/// A single parsed entry from a `Depends`, `Imports` or `LinkingTo` field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencySpec {
    name: String,
    constraint: Option<VersionConstraint>,
}

impl DependencySpec {
    pub fn new(name: String, constraint: Option<VersionConstraint>) -> Self {
        Self { name, constraint }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> Option<&VersionConstraint> {
        self.constraint.as_ref()
    }

    pub fn into_parts(self) -> (String, Option<VersionConstraint>) {
        (self.name, self.constraint)
    }
}
