//! cran-skeleton - conda recipe generator for CRAN packages
//!
//! This library turns a CRAN repository's `PACKAGES` index into conda build
//! recipes (`meta.yaml`, `build.sh`, `bld.bat`), translating R dependency
//! declarations into conda requirements. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`recipe_generation`): Index parsing, dependency resolution and naming policies
//! - **Application Layer** (`application`): Use cases, factories and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cran_skeleton::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let cran_url = "https://cran.r-project.org/src/contrib/";
//!
//! // Create adapters
//! let index_fetcher = IndexFetcherFactory::create(cran_url)?;
//! let recipe_writer = FileSystemRecipeWriter::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateRecipesUseCase::new(
//!     index_fetcher,
//!     recipe_writer,
//!     progress_reporter,
//!     RecipeFormatterFactory::all(),
//! );
//!
//! // Execute
//! let request = RecipeRequest::new(cran_url, PathBuf::from("."), vec!["xtable".to_string()], None);
//! let response = use_case.execute(request)?;
//!
//! for recipe in &response.recipes {
//!     println!("{}", recipe.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod recipe_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemRecipeWriter, LocalIndexReader};
    pub use crate::adapters::outbound::formatters::{
        BldBatFormatter, BuildShFormatter, MetaYamlFormatter,
    };
    pub use crate::adapters::outbound::network::CranIndexClient;
    pub use crate::application::dto::{GeneratedRecipe, RecipeRequest, RecipeResponse};
    pub use crate::application::factories::{IndexFetcherFactory, RecipeFormatterFactory};
    pub use crate::application::use_cases::GenerateRecipesUseCase;
    pub use crate::ports::outbound::{
        IndexFetcher, ProgressReporter, RecipeFile, RecipeFormatter, RecipeWriter,
    };
    pub use crate::recipe_generation::domain::{
        CranField, DependencySpec, IndexSnapshot, PackageRecord, RecipeFields,
        ResolvedDependencySet, VersionConstraint,
    };
    pub use crate::recipe_generation::services::{
        DependencyParser, DependencyResolver, RecipeFieldBuilder, RecordParser, RecordSplitter,
    };
    pub use crate::shared::error::SkeletonError;
    pub use crate::shared::Result;
}
