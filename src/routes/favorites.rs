use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use recipebook_recipe::{FavoriteState, Recipe};
use serde::Deserialize;

use crate::{
    error::AppError,
    routes::{AppState, UserId},
};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ToggleInput {
    pub recipe_id: String,
}

#[tracing::instrument(skip(app))]
pub async fn list(
    UserId(user): UserId,
    State(app): State<AppState>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    Ok(Json(app.query.favorites(&user).await?))
}

#[tracing::instrument(skip(app))]
pub async fn toggle(
    UserId(user): UserId,
    State(app): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<ToggleInput>, AppError>,
) -> Result<Json<FavoriteState>, AppError> {
    Ok(Json(app.command.toggle_favorite(&user, &input.recipe_id).await?))
}
