/// Use cases module containing application business logic orchestration
mod generate_recipes;

pub use generate_recipes::GenerateRecipesUseCase;
