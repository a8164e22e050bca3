use crate::domain::RecipeSummary;
use serde::{Deserialize, Serialize};

pub const NO_RECIPES_FOUND: &str = "No recipes found. Try different ingredients!";

// Request payload for recipe search.
#[derive(Debug, Deserialize)]
pub struct GetRecipesRequest {
    #[serde(default)]
    pub ingredients: Option<String>,
}

// Either real recipe cards or the single "nothing found" placeholder.
// Untagged so the wire shape stays a plain JSON array in both cases.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecipeListing {
    Found(Vec<RecipeSummary>),
    NotFound([&'static str; 1]),
}

impl From<Vec<RecipeSummary>> for RecipeListing {
    fn from(recipes: Vec<RecipeSummary>) -> Self {
        if recipes.is_empty() {
            RecipeListing::NotFound([NO_RECIPES_FOUND])
        } else {
            RecipeListing::Found(recipes)
        }
    }
}

// Response payload for recipe search.
#[derive(Debug, Serialize)]
pub struct GetRecipesResponse {
    pub recipes: RecipeListing,
}

// Response payload for recipe details.
#[derive(Debug, Serialize)]
pub struct GetRecipeDetailsResponse {
    pub steps: Vec<String>,
}

// Error envelope shared by both routes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
