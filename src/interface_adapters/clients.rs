use crate::domain::{
    InstructionGroup, InstructionStep, ProviderError, RecipeProvider, RecipeSummary,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;

// Thin wrapper around reqwest for Spoonacular calls.
// The API key travels as a query parameter, so request URLs are never logged.
#[derive(Clone)]
pub struct SpoonacularClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

// Upstream payloads are mapped defensively: every field is optional.
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<UpstreamRecipe>,
}

#[derive(Debug, Deserialize)]
struct UpstreamRecipe {
    id: Option<u64>,
    title: Option<String>,
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamInstructionGroup {
    name: Option<String>,
    #[serde(default)]
    steps: Vec<UpstreamStep>,
}

#[derive(Debug, Deserialize)]
struct UpstreamStep {
    #[serde(default)]
    number: u32,
    #[serde(default)]
    step: String,
}

#[derive(Debug, Deserialize)]
struct SpoonacularErrorResponse {
    message: String,
}

#[derive(Debug)]
pub enum SpoonacularError {
    InvalidUrl(String),
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for SpoonacularError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpoonacularError::InvalidUrl(base) => {
                write!(f, "spoonacular base url cannot be used as a base: {base}")
            }
            SpoonacularError::Transport(err) => write!(f, "spoonacular transport error: {err}"),
            SpoonacularError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "spoonacular upstream error {status}: {message}")
                } else {
                    write!(f, "spoonacular upstream error {status}")
                }
            }
            SpoonacularError::Decode(err) => {
                write!(f, "spoonacular response decode error: {err}")
            }
        }
    }
}

impl std::error::Error for SpoonacularError {}

impl SpoonacularClient {
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    // Compose `<base>/<segments...>?<query>&apiKey=<key>` with proper encoding.
    fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, SpoonacularError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SpoonacularError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .extend_pairs(query)
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SpoonacularError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            // Drop the URL from errors: it carries the API key.
            .map_err(|err| SpoonacularError::Transport(err.without_url()))?;
        let status = res.status();

        // Keep upstream status/message for the server-side log line.
        if !status.is_success() {
            let message = res
                .json::<SpoonacularErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(SpoonacularError::Upstream { status, message });
        }

        res.json::<T>()
            .await
            .map_err(|err| SpoonacularError::Decode(err.without_url()))
    }
}

impl UpstreamRecipe {
    fn into_summary(self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        }
    }
}

impl UpstreamInstructionGroup {
    fn into_group(self) -> InstructionGroup {
        InstructionGroup {
            name: self.name.filter(|name| !name.is_empty()),
            steps: self
                .steps
                .into_iter()
                .map(|step| InstructionStep {
                    number: step.number,
                    step: step.step,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn search_by_cuisine(
        &self,
        cuisine: &str,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError> {
        let number = number.to_string();
        let url = self.endpoint(
            &["recipes", "complexSearch"],
            &[
                ("query", cuisine),
                ("includeIngredients", ingredients),
                ("number", number.as_str()),
            ],
        )?;

        let payload = self.get_json::<ComplexSearchResponse>(url).await?;
        Ok(payload.results.into_iter().map(UpstreamRecipe::into_summary).collect())
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError> {
        let number = number.to_string();
        let url = self.endpoint(
            &["recipes", "findByIngredients"],
            &[("ingredients", ingredients), ("number", number.as_str())],
        )?;

        let payload = self.get_json::<Vec<UpstreamRecipe>>(url).await?;
        Ok(payload.into_iter().map(UpstreamRecipe::into_summary).collect())
    }

    async fn analyzed_instructions(
        &self,
        recipe_id: &str,
    ) -> Result<Vec<InstructionGroup>, ProviderError> {
        // The id is one path segment; slashes or spaces in it get percent-encoded.
        let url = self.endpoint(&["recipes", recipe_id, "analyzedInstructions"], &[])?;

        let payload = self.get_json::<Vec<UpstreamInstructionGroup>>(url).await?;
        Ok(payload.into_iter().map(UpstreamInstructionGroup::into_group).collect())
    }
}
