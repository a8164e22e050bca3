use crate::domain::RecipeProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Any provider implementation can be injected; tests use a recording stub.
    pub recipes: Arc<dyn RecipeProvider>,
}
