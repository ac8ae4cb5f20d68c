mod dependency_parser;
mod dependency_resolver;
mod recipe_field_builder;
mod record_parser;
mod record_splitter;

pub use dependency_parser::{DependencyParseError, DependencyParser};
pub use dependency_resolver::{DependencyResolver, DEPENDENCY_FIELDS};
pub use recipe_field_builder::RecipeFieldBuilder;
pub use record_parser::RecordParser;
pub use record_splitter::RecordSplitter;
