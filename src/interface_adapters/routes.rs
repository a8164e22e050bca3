use crate::interface_adapters::handlers::recipes::{get_recipe_details, get_recipes};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub fn app(state: Arc<AppState>) -> Router {
    // Browsers may call the API from any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/get-recipes", post(get_recipes))
        .route("/get-recipe-details/{id}", get(get_recipe_details))
        .layer(cors)
        .with_state(state)
}
