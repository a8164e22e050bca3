use crate::domain::{ProviderError, RecipeError, RecipeProvider, RecipeSummary};

// Cuisine tag used by the category search.
pub const CATEGORY_CUISINE: &str = "indian";
// Upstream result cap applied to each source.
pub const RESULTS_PER_SOURCE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeSource {
    Category,
    Ingredients,
}

impl RecipeSource {
    pub fn label(self) -> &'static str {
        match self {
            RecipeSource::Category => "category",
            RecipeSource::Ingredients => "ingredients",
        }
    }
}

// Combined result of the fan-out. Category results always come first.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub recipes: Vec<RecipeSummary>,
    pub failed_sources: Vec<RecipeSource>,
}

impl SearchOutcome {
    // Append one source's results; a failed source contributes nothing.
    fn absorb(
        &mut self,
        source: RecipeSource,
        result: Result<Vec<RecipeSummary>, ProviderError>,
    ) {
        match result {
            Ok(mut recipes) => {
                tracing::debug!(
                    source = source.label(),
                    count = recipes.len(),
                    "source answered"
                );
                self.recipes.append(&mut recipes);
            }
            Err(error) => {
                tracing::error!(
                    source = source.label(),
                    %error,
                    "failed to fetch recipes from source"
                );
                self.failed_sources.push(source);
            }
        }
    }
}

// Best-effort recipe search across both upstream sources.
pub struct SearchRecipesUseCase<'a> {
    pub provider: &'a dyn RecipeProvider,
}

impl SearchRecipesUseCase<'_> {
    pub async fn execute(&self, ingredients: Option<&str>) -> Result<SearchOutcome, RecipeError> {
        // Validate on the trimmed value but forward the raw string upstream.
        let ingredients = ingredients
            .filter(|value| !value.trim().is_empty())
            .ok_or(RecipeError::MissingIngredients)?;

        // Both lookups are in flight together; neither short-circuits the other.
        let (category, matched) = tokio::join!(
            self.provider
                .search_by_cuisine(CATEGORY_CUISINE, ingredients, RESULTS_PER_SOURCE),
            self.provider
                .find_by_ingredients(ingredients, RESULTS_PER_SOURCE),
        );

        let mut outcome = SearchOutcome::default();
        outcome.absorb(RecipeSource::Category, category);
        outcome.absorb(RecipeSource::Ingredients, matched);
        Ok(outcome)
    }
}
