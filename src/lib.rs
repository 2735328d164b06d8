pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod viewmodel;

pub use config::{CatalogConfig, DEFAULT_ENDPOINT};
pub use error::{CatalogError, FetchError};
pub use model::{Recipe, RecipeResponse};
pub use repository::{HttpRecipeRepository, RecipeSource};
pub use viewmodel::{RecipeListViewModel, SortOption, ViewStatus, ALL_CUISINES};

use std::sync::Arc;

/// Fetch the catalog once using the given configuration.
pub async fn fetch_recipes(config: &CatalogConfig) -> Result<Vec<Recipe>, FetchError> {
    HttpRecipeRepository::new(config)?.fetch().await
}

/// Build a view-model backed by the HTTP repository.
pub fn view_model(config: &CatalogConfig) -> Result<RecipeListViewModel, FetchError> {
    let repository = HttpRecipeRepository::new(config)?;
    Ok(RecipeListViewModel::new(Arc::new(repository)))
}
