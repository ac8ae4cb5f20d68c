/// Mock implementations for testing
mod mock_index_fetcher;
mod mock_progress_reporter;
mod mock_recipe_writer;

pub use mock_index_fetcher::MockIndexFetcher;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_recipe_writer::MockRecipeWriter;
