/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod recipe_request;
mod recipe_response;

pub use recipe_request::RecipeRequest;
pub use recipe_response::{GeneratedRecipe, RecipeResponse};
