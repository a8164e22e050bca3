use crate::domain::RecipeError;
use crate::interface_adapters::protocol::{
    ErrorResponse, GetRecipeDetailsResponse, GetRecipesRequest, GetRecipesResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{RecipeDetailsUseCase, SearchRecipesUseCase};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// Handler for the combined recipe search.
#[tracing::instrument(
    name = "get_recipes",
    skip_all,
    fields(ingredients = tracing::field::Empty)
)]
pub async fn get_recipes(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GetRecipesRequest>, JsonRejection>,
) -> Result<Json<GetRecipesResponse>, ErrorReply> {
    // An unreadable body is treated like a body without ingredients.
    let ingredients = match payload {
        Ok(Json(body)) => body.ingredients,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable recipe search payload");
            None
        }
    };
    if let Some(ingredients) = ingredients.as_deref() {
        tracing::Span::current().record("ingredients", ingredients);
    }
    tracing::info!("recipe search requested.");

    let use_case = SearchRecipesUseCase {
        provider: state.recipes.as_ref(),
    };
    let outcome = guarded(use_case.execute(ingredients.as_deref()))
        .await
        .map_err(|err| map_recipe_error(err, RecipeErrorContext::Search))?;

    tracing::info!(
        count = outcome.recipes.len(),
        failed_sources = ?outcome.failed_sources,
        "recipe search finished."
    );

    Ok(Json(GetRecipesResponse {
        recipes: outcome.recipes.into(),
    }))
}

// Handler for the step-by-step instructions of one recipe.
#[tracing::instrument(
    name = "get_recipe_details",
    skip_all,
    fields(recipe_id = tracing::field::Empty)
)]
pub async fn get_recipe_details(
    State(state): State<Arc<AppState>>,
    recipe_id: Result<Path<String>, PathRejection>,
) -> Result<Json<GetRecipeDetailsResponse>, ErrorReply> {
    let recipe_id = match recipe_id {
        Ok(Path(recipe_id)) => recipe_id,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable recipe id");
            String::new()
        }
    };
    tracing::Span::current().record("recipe_id", recipe_id.as_str());
    tracing::info!("recipe details requested.");

    let use_case = RecipeDetailsUseCase {
        provider: state.recipes.as_ref(),
    };
    let steps = guarded(use_case.execute(&recipe_id))
        .await
        .map_err(|err| map_recipe_error(err, RecipeErrorContext::Details))?;

    Ok(Json(GetRecipeDetailsResponse { steps }))
}

// Turn a panic inside a use case into an internal error instead of a dropped connection.
async fn guarded<T>(
    work: impl Future<Output = Result<T, RecipeError>>,
) -> Result<T, RecipeError> {
    AssertUnwindSafe(work)
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(RecipeError::Internal(panic_message(panic.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "use case panicked".to_string()
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses by endpoint context.
enum RecipeErrorContext {
    Search,
    Details,
}

fn map_recipe_error(err: RecipeError, context: RecipeErrorContext) -> ErrorReply {
    match context {
        RecipeErrorContext::Search => match err {
            RecipeError::MissingIngredients => {
                error_response(StatusCode::BAD_REQUEST, "Ingredients are required!")
            }
            RecipeError::MissingRecipeId | RecipeError::Internal(_) => {
                tracing::error!(error = %err, "failed to fetch recipes.");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch recipes.")
            }
        },
        RecipeErrorContext::Details => match err {
            RecipeError::MissingRecipeId => {
                error_response(StatusCode::BAD_REQUEST, "Recipe ID is required!")
            }
            RecipeError::MissingIngredients | RecipeError::Internal(_) => {
                tracing::error!(error = %err, "failed to fetch recipe details.");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch recipe details.",
                )
            }
        },
    }
}
