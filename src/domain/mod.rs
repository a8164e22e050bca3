pub mod errors;
mod recipes;

// Re-export the domain boundary types and ports.
pub use errors::RecipeError;
pub use recipes::{
    InstructionGroup, InstructionStep, ProviderError, RecipeProvider, RecipeSummary,
};
