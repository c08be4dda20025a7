use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use recipebook_recipe::{Difficulty, Recipe};

use crate::class_names::class_names;

/// Tags shown on a card before collapsing the rest into a `+N` badge.
pub const CARD_VISIBLE_TAGS: usize = 2;

#[derive(askama::Template)]
#[template(path = "recipe-card.html")]
pub struct RecipeCardTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub difficulty: &'static str,
    pub difficulty_class: String,
    pub card_class: String,
    pub rating: String,
    pub visible_tags: Vec<String>,
    pub hidden_tags: usize,
}

impl RecipeCardTemplate {
    pub fn new(recipe: &Recipe, extra_class: &str) -> Self {
        let (difficulty, tone) = match recipe.difficulty {
            Difficulty::Facil => ("Fácil", "bg-green-100 text-green-800"),
            Difficulty::Medio => ("Medio", "bg-yellow-100 text-yellow-800"),
            Difficulty::Dificil => ("Difícil", "bg-red-100 text-red-800"),
        };

        Self {
            id: recipe.id.to_owned(),
            title: recipe.title.to_owned(),
            description: recipe.description.to_owned(),
            image_url: recipe.image_url.to_owned().unwrap_or_default(),
            difficulty,
            difficulty_class: class_names(&["rounded-full px-2 py-1 text-xs font-medium", tone]),
            card_class: class_names(&["block rounded-lg bg-white shadow", extra_class]),
            rating: format!("{:.1}", recipe.rating),
            visible_tags: recipe.tags.iter().take(CARD_VISIBLE_TAGS).cloned().collect(),
            hidden_tags: recipe.tags.len().saturating_sub(CARD_VISIBLE_TAGS),
        }
    }
}

pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template. Error: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render template").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;

    fn recipe(tags: &[&str]) -> Recipe {
        Recipe {
            id: "01J".to_owned(),
            title: "Flan".to_owned(),
            rating: 4.5,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn card_collapses_extra_tags() {
        let html = RecipeCardTemplate::new(&recipe(&["dulce", "horno", "clasico", "huevo"]), "")
            .render()
            .unwrap();

        assert!(html.contains(">dulce<"));
        assert!(html.contains(">horno<"));
        assert!(!html.contains(">clasico<"));
        assert!(!html.contains(">huevo<"));
        assert!(html.contains(">+2<"));
        assert!(html.contains("4.5"));
    }

    #[test]
    fn card_without_extra_tags_has_no_badge() {
        let html = RecipeCardTemplate::new(&recipe(&["dulce", "horno"]), "")
            .render()
            .unwrap();

        assert!(html.contains(">horno<"));
        assert!(!html.contains(">+"));
    }

    #[test]
    fn card_class_merges_overrides() {
        let card = RecipeCardTemplate::new(&recipe(&[]), "shadow-lg hidden");

        assert_eq!(card.card_class, "rounded-lg bg-white shadow-lg hidden");
        assert_eq!(card.hidden_tags, 0);
    }
}
