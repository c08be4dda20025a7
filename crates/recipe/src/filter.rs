use serde::Deserialize;

use crate::{Difficulty, Recipe, slugify};

/// Conjunction of optional predicates over a recipe collection.
///
/// Every supplied field must match; unset fields (and blank search text or
/// an empty tag list) do not constrain the result. There is no ranking: the
/// output keeps the input order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub max_total_time: Option<u32>,
}

impl RecipeFilter {
    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        recipes.into_iter().filter(|r| self.matches(r)).collect()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe)
            && self.matches_category(recipe)
            && self.matches_difficulty(recipe)
            && self.matches_rating(recipe)
            && self.matches_tags(recipe)
            && self.matches_time(recipe)
    }

    pub fn search_text(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn category_slug(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
    }

    fn wanted_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|t| slugify(t))
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let Some(needle) = self.search_text() else {
            return true;
        };

        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

        hit(&recipe.title)
            || hit(&recipe.description)
            || recipe.ingredients.iter().any(|i| hit(&i.item))
            || recipe.tags.iter().any(|t| hit(t))
    }

    fn matches_category(&self, recipe: &Recipe) -> bool {
        match self.category_slug() {
            Some(slug) => recipe.category.as_deref() == Some(slug.as_str()),
            None => true,
        }
    }

    fn matches_difficulty(&self, recipe: &Recipe) -> bool {
        self.difficulty.is_none_or(|d| recipe.difficulty == d)
    }

    fn matches_rating(&self, recipe: &Recipe) -> bool {
        self.min_rating.is_none_or(|min| recipe.rating >= min)
    }

    fn matches_tags(&self, recipe: &Recipe) -> bool {
        let wanted = self.wanted_tags();
        if wanted.is_empty() {
            return true;
        }

        recipe
            .tags
            .iter()
            .any(|t| wanted.contains(&slugify(t)))
    }

    fn matches_time(&self, recipe: &Recipe) -> bool {
        self.max_total_time
            .is_none_or(|max| recipe.total_minutes() <= max)
    }
}

/// Leading integer of a free-text duration (`"15 min"` -> 15). Anything
/// without leading digits counts as zero; numbers too large for `u32`
/// saturate.
pub fn leading_minutes(value: &str) -> u32 {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u32::MAX)
}
