mod index_fetcher_factory;
mod recipe_formatter_factory;

pub use index_fetcher_factory::IndexFetcherFactory;
pub use recipe_formatter_factory::RecipeFormatterFactory;
