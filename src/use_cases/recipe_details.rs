use crate::domain::{InstructionGroup, RecipeError, RecipeProvider};

pub const INSTRUCTIONS_UNAVAILABLE: &str = "Step-by-step instructions not available.";
pub const INSTRUCTIONS_FAILED: &str = "Failed to fetch instructions.";

// Recipe instruction lookup with injected provider.
pub struct RecipeDetailsUseCase<'a> {
    pub provider: &'a dyn RecipeProvider,
}

impl RecipeDetailsUseCase<'_> {
    pub async fn execute(&self, recipe_id: &str) -> Result<Vec<String>, RecipeError> {
        if recipe_id.trim().is_empty() {
            return Err(RecipeError::MissingRecipeId);
        }

        match self.provider.analyzed_instructions(recipe_id).await {
            Ok(groups) => Ok(describe_steps(groups)),
            Err(error) => {
                // Upstream failures never escape; the sentinel tells callers what happened.
                tracing::error!(%error, "failed to fetch recipe instructions");
                Ok(vec![INSTRUCTIONS_FAILED.to_string()])
            }
        }
    }
}

// Only the first group is rendered, with the upstream numbering kept as-is.
fn describe_steps(groups: Vec<InstructionGroup>) -> Vec<String> {
    let Some(first) = groups.into_iter().next() else {
        return vec![INSTRUCTIONS_UNAVAILABLE.to_string()];
    };

    first
        .steps
        .into_iter()
        .map(|step| format!("Step {}: {}", step.number, step.step))
        .collect()
}
