pub mod recipe_details;
pub mod search_recipes;

#[cfg(test)]
pub(crate) mod test_support;

pub use recipe_details::RecipeDetailsUseCase;
pub use search_recipes::{RecipeSource, SearchOutcome, SearchRecipesUseCase};
