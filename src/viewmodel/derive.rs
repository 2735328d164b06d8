//! Pure derivations of the visible recipe list and the cuisine facet.
//!
//! Nothing here mutates session state; callers re-run these after every
//! state change.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::state::{SessionState, SortOption, ALL_CUISINES};
use crate::model::Recipe;

/// Compute the visible recipes: search, then cuisine filter, then sort.
///
/// Search is a case-insensitive substring match on name or cuisine. The
/// cuisine filter is an exact, case-sensitive match unless it is
/// [`ALL_CUISINES`]. `rng` is only used for [`SortOption::Random`].
pub fn visible_recipes<'a, R>(state: &'a SessionState, rng: &mut R) -> Vec<&'a Recipe>
where
    R: Rng + ?Sized,
{
    let mut visible: Vec<&Recipe> = state.recipes().iter().collect();

    if !state.search_text().is_empty() {
        let query = state.search_text().to_lowercase();
        visible.retain(|recipe| matches_query(recipe, &query));
    }

    let cuisine = state.selected_cuisine();
    if cuisine != ALL_CUISINES {
        visible.retain(|recipe| recipe.cuisine() == cuisine);
    }

    match state.sort_option() {
        SortOption::AToZ => visible.sort_by_cached_key(|recipe| recipe.name().to_lowercase()),
        SortOption::ZToA => {
            visible.sort_by_cached_key(|recipe| Reverse(recipe.name().to_lowercase()))
        }
        SortOption::Random => visible.shuffle(rng),
    }

    visible
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.name().to_lowercase().contains(query) || recipe.cuisine().to_lowercase().contains(query)
}

/// Distinct cuisines across all recipes, sorted, with [`ALL_CUISINES`] first.
pub fn available_cuisines(recipes: &[Recipe]) -> Vec<String> {
    let distinct: BTreeSet<&str> = recipes.iter().map(Recipe::cuisine).collect();

    std::iter::once(ALL_CUISINES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}
