use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use url::Url;

use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::model::{Recipe, RecipeResponse};

/// Anything that can produce the recipe catalog.
///
/// Implemented by [`HttpRecipeRepository`] and by in-memory doubles in tests.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the full catalog. An empty list is a successful result.
    async fn fetch(&self) -> Result<Vec<Recipe>, FetchError>;
}

/// Fetches the catalog over HTTP from a fixed endpoint.
///
/// Holds no state between calls, so one instance can serve concurrent fetches.
#[derive(Debug, Clone)]
pub struct HttpRecipeRepository {
    client: Client,
    endpoint: String,
}

impl HttpRecipeRepository {
    /// Build the HTTP client from `config`.
    ///
    /// Fails with [`FetchError::Transport`] if the client cannot be built,
    /// before any request is made.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, config.endpoint.clone()))
    }

    /// Use a preconfigured client, e.g. one pointed at a mock server.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        HttpRecipeRepository {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeRepository {
    async fn fetch(&self) -> Result<Vec<Recipe>, FetchError> {
        let url = Url::parse(&self.endpoint).map_err(|source| FetchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        debug!("Fetching recipes from {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recipe endpoint answered with HTTP {}", status.as_u16());
            return Err(FetchError::BadServerResponse(status.as_u16()));
        }

        let body = response.bytes().await?;
        let recipes = decode_recipes(&body)?;
        info!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }
}

/// Decode a response body; one malformed element rejects the whole payload.
pub fn decode_recipes(body: &[u8]) -> Result<Vec<Recipe>, FetchError> {
    let response: RecipeResponse = serde_json::from_slice(body)?;
    Ok(response.recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_whole_payload_on_bad_element() {
        let body = br#"{
            "recipes": [
                {"cuisine": "Malaysian", "name": "Apam Balik", "uuid": "0c6ca6e7"},
                {"cuisine": "British", "name": "Apple & Blackberry Crumble"}
            ]
        }"#;

        let result = decode_recipes(body);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_json() {
        let result = decode_recipes(br#"{"recipes": [{"cuisine": "British""#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_missing_envelope() {
        let result = decode_recipes(br#"[{"cuisine": "British", "name": "Crumble", "uuid": "1"}]"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_preserves_order() {
        let body = br#"{"recipes": [
            {"cuisine": "British", "name": "Treacle Tart", "uuid": "1"},
            {"cuisine": "French", "name": "Apple Frangipan Tart", "uuid": "2"}
        ]}"#;

        let recipes = decode_recipes(body).unwrap();
        let names: Vec<&str> = recipes.iter().map(Recipe::name).collect();
        assert_eq!(names, vec!["Treacle Tart", "Apple Frangipan Tart"]);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_skips_network() {
        let repository = HttpRecipeRepository::with_client(Client::new(), "not a url");
        let result = repository.fetch().await;
        assert!(matches!(result, Err(FetchError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_new_rejects_unbuildable_client() {
        let config = CatalogConfig {
            user_agent: "recipe-catalog\n/0.1".to_string(),
            ..CatalogConfig::default()
        };
        let result = HttpRecipeRepository::new(&config);
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[test]
    fn test_new_uses_configured_endpoint() {
        let repository = HttpRecipeRepository::new(&CatalogConfig::default()).unwrap();
        assert_eq!(repository.endpoint(), crate::config::DEFAULT_ENDPOINT);
    }
}
