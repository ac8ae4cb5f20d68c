/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod index_fetcher;
pub mod progress_reporter;
pub mod recipe_formatter;
pub mod recipe_writer;

pub use index_fetcher::IndexFetcher;
pub use progress_reporter::ProgressReporter;
pub use recipe_formatter::RecipeFormatter;
pub use recipe_writer::{RecipeFile, RecipeWriter};
