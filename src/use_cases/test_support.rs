use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{
    InstructionGroup, InstructionStep, ProviderError, RecipeProvider, RecipeSummary,
};

pub(crate) type CallLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn summary(id: u64, title: &str) -> RecipeSummary {
    RecipeSummary {
        id: Some(id),
        title: title.to_string(),
        image: format!("https://img.example/{id}.jpg"),
    }
}

pub(crate) fn group(steps: &[(u32, &str)]) -> InstructionGroup {
    InstructionGroup {
        name: None,
        steps: steps
            .iter()
            .map(|(number, step)| InstructionStep {
                number: *number,
                step: step.to_string(),
            })
            .collect(),
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub category: bool,
    pub ingredients: bool,
    pub instructions: bool,
}

// Scripted provider that records every call it receives.
#[derive(Clone, Default)]
pub(crate) struct RecordingProvider {
    category: Vec<RecipeSummary>,
    ingredients: Vec<RecipeSummary>,
    instructions: Vec<InstructionGroup>,
    failures: FailureFlags,
    category_delay: Duration,
    panic_on_search: bool,
    calls: CallLog,
    completions: CallLog,
}

impl RecordingProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_category(mut self, recipes: Vec<RecipeSummary>) -> Self {
        self.category = recipes;
        self
    }

    pub(crate) fn with_ingredients(mut self, recipes: Vec<RecipeSummary>) -> Self {
        self.ingredients = recipes;
        self
    }

    pub(crate) fn with_instructions(mut self, groups: Vec<InstructionGroup>) -> Self {
        self.instructions = groups;
        self
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_category_delay(mut self, delay: Duration) -> Self {
        self.category_delay = delay;
        self
    }

    pub(crate) fn panicking_on_search(mut self) -> Self {
        self.panic_on_search = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(crate) fn completions(&self) -> Vec<String> {
        self.completions
            .lock()
            .expect("completions mutex poisoned")
            .clone()
    }

    fn record(log: &CallLog, entry: String) {
        log.lock().expect("call log mutex poisoned").push(entry);
    }
}

#[async_trait]
impl RecipeProvider for RecordingProvider {
    async fn search_by_cuisine(
        &self,
        cuisine: &str,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError> {
        Self::record(
            &self.calls,
            format!("complexSearch:{cuisine}:{ingredients}:{number}"),
        );
        if self.panic_on_search {
            panic!("category search exploded");
        }
        if !self.category_delay.is_zero() {
            tokio::time::sleep(self.category_delay).await;
        }
        Self::record(&self.completions, "complexSearch".to_string());

        if self.failures.category {
            return Err("category search failed".into());
        }
        Ok(self.category.clone())
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError> {
        Self::record(
            &self.calls,
            format!("findByIngredients:{ingredients}:{number}"),
        );
        Self::record(&self.completions, "findByIngredients".to_string());

        if self.failures.ingredients {
            return Err("ingredient search failed".into());
        }
        Ok(self.ingredients.clone())
    }

    async fn analyzed_instructions(
        &self,
        recipe_id: &str,
    ) -> Result<Vec<InstructionGroup>, ProviderError> {
        Self::record(&self.calls, format!("analyzedInstructions:{recipe_id}"));

        if self.failures.instructions {
            return Err("instructions lookup failed".into());
        }
        Ok(self.instructions.clone())
    }
}
