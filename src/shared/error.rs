use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested recipe was written
    Success = 0,
    /// Application error (unknown package, parse failure, network error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for recipe generation.
///
/// Every variant is fatal to the run. Unknown index fields are not errors;
/// they are reported as warnings through the progress reporter.
#[derive(Debug, Error)]
pub enum SkeletonError {
    #[error("Package {package} not found in the CRAN index\n\n💡 Hint: Check the spelling, or verify that --cran-url points at the right repository")]
    UnknownPackage { package: String },

    #[error("Malformed record in CRAN index: {line:?}\nDetails: {details}")]
    MalformedRecord { line: String, details: String },

    #[error("Package {package} has no {field} field in the CRAN index")]
    MissingField { package: String, field: String },

    #[error("Could not parse dependency of {package}: {token}\nDetails: {reason}")]
    UnsupportedDependencySyntax {
        package: String,
        token: String,
        reason: String,
    },

    #[error("{feature} is not implemented yet")]
    UnsupportedFeature { feature: String },

    #[error("Failed to fetch CRAN index from {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection and the repository URL")]
    IndexFetchError { url: String, details: String },

    #[error("Failed to write recipe: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    RecipeWriteError { path: PathBuf, details: String },

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --output-dir")]
    InvalidOutputDir { path: PathBuf, reason: String },
}
