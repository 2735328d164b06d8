use std::fmt;
use std::str::FromStr;

use crate::model::Recipe;

/// Cuisine filter value that disables filtering.
pub const ALL_CUISINES: &str = "All";

/// Shown when the catalog was fetched successfully but holds no recipes.
pub const NO_RECIPES_MESSAGE: &str = "No recipes available.";

/// Shown for every fetch failure regardless of its cause.
pub const MALFORMED_MESSAGE: &str = "Recipes data are malformed.";

/// Shown when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Ordering applied to the visible recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Case-insensitive by name, A to Z (default)
    #[default]
    AToZ,
    /// Case-insensitive by name, Z to A
    ZToA,
    /// Fresh shuffle on every derivation
    Random,
}

impl SortOption {
    /// Options in menu order.
    pub const ALL: [SortOption; 3] = [SortOption::AToZ, SortOption::ZToA, SortOption::Random];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::AToZ => "A~Z",
            SortOption::ZToA => "Z~A",
            SortOption::Random => "Random Order",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = String;

    /// Accepts the menu labels as well as `a-z`, `z-a` and `random`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a~z" | "a-z" | "asc" => Ok(SortOption::AToZ),
            "z~a" | "z-a" | "desc" => Ok(SortOption::ZToA),
            "random" | "random order" => Ok(SortOption::Random),
            other => Err(format!("Unknown sort option: {}", other)),
        }
    }
}

/// What the screen should show, checked in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Error(String),
    /// Search text is set but nothing matches
    NoResults,
    Content,
}

/// Mutable state of one catalog screen.
///
/// Only [`RecipeListViewModel`](super::RecipeListViewModel) writes to it.
#[derive(Debug, Clone)]
pub struct SessionState {
    recipes: Vec<Recipe>,
    cuisines: Vec<String>,
    search_text: String,
    selected_cuisine: String,
    sort_option: SortOption,
    is_loading: bool,
    error_message: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            cuisines: vec![ALL_CUISINES.to_string()],
            search_text: String::new(),
            selected_cuisine: ALL_CUISINES.to_string(),
            sort_option: SortOption::default(),
            is_loading: false,
            error_message: None,
        }
    }
}

impl SessionState {
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct cuisines of all recipes, sorted, with [`ALL_CUISINES`] first.
    pub fn available_cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_cuisine(&self) -> &str {
        &self.selected_cuisine
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub(super) fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    pub(super) fn set_selected_cuisine(&mut self, cuisine: String) {
        self.selected_cuisine = cuisine;
    }

    pub(super) fn set_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
    }

    pub(super) fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Apply a successful fetch. Loading is cleared before any message is set.
    pub(super) fn finish_fetch(&mut self, recipes: Vec<Recipe>) {
        self.is_loading = false;
        self.error_message = recipes.is_empty().then(|| NO_RECIPES_MESSAGE.to_string());
        self.replace_recipes(recipes);
    }

    /// Apply a failed fetch; earlier recipes are dropped.
    pub(super) fn fail_fetch(&mut self) {
        self.is_loading = false;
        self.error_message = Some(MALFORMED_MESSAGE.to_string());
        self.replace_recipes(Vec::new());
    }

    fn replace_recipes(&mut self, recipes: Vec<Recipe>) {
        self.cuisines = super::derive::available_cuisines(&recipes);
        self.recipes = recipes;
    }
}
