use async_trait::async_trait;
use serde::Serialize;

// Serialize lives here so handlers can return summaries without a mirror DTO.
// Recipe card returned to clients by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    // Upstream recipe id; null when the upstream entry omits it.
    pub id: Option<u64>,
    pub title: String,
    pub image: String,
}

// One analyzed-instructions block for a recipe (upstream may return several).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstructionGroup {
    pub name: Option<String>,
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStep {
    // Step number as reported upstream, never renumbered.
    pub number: u32,
    pub step: String,
}

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

// Use cases depend on this port, not on the concrete HTTP client.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    // Cuisine-constrained search filtered by the ingredients string.
    async fn search_by_cuisine(
        &self,
        cuisine: &str,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError>;

    // Recipes ranked by overlap with the ingredients string.
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError>;

    async fn analyzed_instructions(
        &self,
        recipe_id: &str,
    ) -> Result<Vec<InstructionGroup>, ProviderError>;
}
