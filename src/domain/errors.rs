use std::fmt;

// Domain-level errors for recipe workflows.
#[derive(Debug)]
pub enum RecipeError {
    MissingIngredients,
    MissingRecipeId,
    // Anything escaping the per-source guards (e.g. a panicking provider).
    Internal(String),
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::MissingIngredients => write!(f, "ingredients are required"),
            RecipeError::MissingRecipeId => write!(f, "recipe id is required"),
            RecipeError::Internal(reason) => write!(f, "internal error: {reason}"),
        }
    }
}

impl std::error::Error for RecipeError {}
