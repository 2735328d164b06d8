//! Session state for one catalog screen and the policy that drives it.
//!
//! [`RecipeListViewModel`] is the only writer of the session state. Fetches
//! run on spawned tokio tasks and report back through a channel; their results
//! are applied only when the owner calls
//! [`next_completion`](RecipeListViewModel::next_completion),
//! [`apply_pending`](RecipeListViewModel::apply_pending) or
//! [`fetch_recipes`](RecipeListViewModel::fetch_recipes), so every state change
//! happens on the owner's update path.
//!
//! Overlapping fetches are resolved by generation: only the completion of the
//! most recently triggered fetch is applied, older ones are discarded.

mod derive;
mod state;

pub use derive::available_cuisines;
pub use state::{
    SortOption, ViewStatus, ALL_CUISINES, MALFORMED_MESSAGE, NO_RECIPES_MESSAGE,
    NO_RESULTS_MESSAGE,
};

use derive::visible_recipes;
use state::SessionState;

use std::sync::Arc;

use log::{debug, error, info};
use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

use crate::error::FetchError;
use crate::model::Recipe;
use crate::repository::RecipeSource;

/// Result of one fetch, tagged with the generation that started it.
#[derive(Debug)]
struct FetchCompletion {
    generation: u64,
    result: Result<Vec<Recipe>, FetchError>,
}

pub struct RecipeListViewModel {
    source: Arc<dyn RecipeSource>,
    state: SessionState,
    generation: u64,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl RecipeListViewModel {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        RecipeListViewModel {
            source,
            state: SessionState::default(),
            generation: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.state.recipes()
    }

    pub fn available_cuisines(&self) -> &[String] {
        self.state.available_cuisines()
    }

    pub fn search_text(&self) -> &str {
        self.state.search_text()
    }

    pub fn selected_cuisine(&self) -> &str {
        self.state.selected_cuisine()
    }

    pub fn sort_option(&self) -> SortOption {
        self.state.sort_option()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text.into());
    }

    /// Any string is accepted; an unknown cuisine just filters everything out.
    pub fn set_selected_cuisine(&mut self, cuisine: impl Into<String>) {
        self.state.set_selected_cuisine(cuisine.into());
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.state.set_sort_option(option);
    }

    /// Derive the visible list from the current state.
    ///
    /// With [`SortOption::Random`] every call returns a fresh shuffle.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        visible_recipes(&self.state, &mut rand::thread_rng())
    }

    /// Same as [`visible_recipes`](Self::visible_recipes) with a caller-supplied RNG.
    pub fn visible_recipes_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Recipe> {
        visible_recipes(&self.state, rng)
    }

    pub fn status(&self) -> ViewStatus {
        if self.state.is_loading() {
            return ViewStatus::Loading;
        }
        if let Some(message) = self.state.error_message() {
            return ViewStatus::Error(message.to_string());
        }
        if !self.state.search_text().is_empty() && self.visible_recipes().is_empty() {
            return ViewStatus::NoResults;
        }
        ViewStatus::Content
    }

    /// Photo of the first visible recipe, large preferred.
    pub fn hero_photo(&self) -> Option<&Url> {
        self.visible_recipes()
            .first()
            .copied()
            .and_then(Recipe::preferred_photo)
    }

    /// Start a fetch in the background.
    ///
    /// Sets the loading flag and clears the error immediately. The result is
    /// not applied until it is received on the update path. Must be called
    /// from within a tokio runtime.
    pub fn trigger_fetch(&mut self) -> JoinHandle<()> {
        self.generation += 1;
        let generation = self.generation;
        self.state.begin_fetch();
        debug!("Starting fetch {}", generation);

        let source = Arc::clone(&self.source);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            if completions
                .send(FetchCompletion { generation, result })
                .is_err()
            {
                debug!("View-model dropped before fetch {} completed", generation);
            }
        })
    }

    /// Apply a completed fetch. Returns `false` if it was superseded.
    fn apply_completion(&mut self, completion: FetchCompletion) -> bool {
        if completion.generation != self.generation {
            debug!(
                "Discarding fetch {} (latest is {})",
                completion.generation, self.generation
            );
            return false;
        }

        match completion.result {
            Ok(recipes) => {
                info!("Fetch completed with {} recipes", recipes.len());
                self.state.finish_fetch(recipes);
            }
            Err(e) => {
                error!("Error fetching recipes: {}", e);
                self.state.fail_fetch();
            }
        }
        true
    }

    /// Apply every completion that has already arrived, without waiting.
    ///
    /// Returns how many were applied (0 or 1 in practice).
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply_completion(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next completion and apply it.
    pub async fn next_completion(&mut self) -> bool {
        match self.completions_rx.recv().await {
            Some(completion) => self.apply_completion(completion),
            None => false,
        }
    }

    /// Trigger a fetch and wait until the newest one has been applied.
    pub async fn fetch_recipes(&mut self) {
        let handle = self.trigger_fetch();
        if let Err(e) = handle.await {
            error!("Fetch task failed: {}", e);
            self.state.fail_fetch();
            return;
        }

        // The completion for the current generation is already queued
        while self.state.is_loading() {
            match self.completions_rx.recv().await {
                Some(completion) => {
                    self.apply_completion(completion);
                }
                None => break,
            }
        }
    }
}

impl std::fmt::Debug for RecipeListViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeListViewModel")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
