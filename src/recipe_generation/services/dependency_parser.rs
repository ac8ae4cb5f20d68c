use crate::recipe_generation::domain::{DependencySpec, VersionConstraint};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `name (relop version) [archs]`, adapted from the Debian relation grammar
static DEPENDENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<name>[a-zA-Z0-9.+\-]+)(?:\s*\(\s*(?P<relop>[>=<]+)\s*(?P<version>[0-9a-zA-Z:\-+~.]+)\s*\))?(?:\s*\[(?P<archs>[\s!\w\-]+)\])?\s*$",
    )
    .expect("dependency pattern is a valid regex")
});

/// Reasons a dependency token cannot be translated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyParseError {
    #[error("architecture qualifiers are not supported: [{archs}]")]
    ArchitectureQualified { archs: String },

    #[error("expected `name`, `name (relop version)` or `name [archs]`")]
    InvalidSyntax,
}

/// DependencyParser service for single dependency tokens
pub struct DependencyParser;

impl DependencyParser {
    /// Parses one comma-separated entry of a dependency field
    ///
    /// # Examples
    /// ```
    /// use cran_skeleton::recipe_generation::services::DependencyParser;
    ///
    /// let dep = DependencyParser::parse("R (>= 2.15.0)").unwrap();
    /// assert_eq!(dep.name(), "R");
    /// assert_eq!(dep.constraint().unwrap().to_string(), ">=2.15.0");
    /// ```
    ///
    /// # Errors
    /// - `ArchitectureQualified` if the token carries an `[arch]` list
    /// - `InvalidSyntax` if the token does not match the grammar
    pub fn parse(token: &str) -> Result<DependencySpec, DependencyParseError> {
        let captures = DEPENDENCY_PATTERN
            .captures(token)
            .ok_or(DependencyParseError::InvalidSyntax)?;

        if let Some(archs) = captures.name("archs") {
            return Err(DependencyParseError::ArchitectureQualified {
                archs: archs.as_str().to_string(),
            });
        }

        // The grammar only yields a relop together with a version
        let constraint = match (captures.name("relop"), captures.name("version")) {
            (Some(relop), Some(version)) => Some(VersionConstraint::new(
                relop.as_str().to_string(),
                version.as_str().to_string(),
            )),
            _ => None,
        };

        Ok(DependencySpec::new(
            captures["name"].to_string(),
            constraint,
        ))
    }
}
