use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::{Query, WithRejection};
use recipebook_recipe::{Category, category::CreateCategoryInput};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    routes::{AppState, UserId},
};

#[derive(Deserialize, Debug, Default)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

#[tracing::instrument(skip(app))]
pub async fn list(
    UserId(user): UserId,
    State(app): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(app.query.categories(&user).await?))
}

#[tracing::instrument(skip(app, input))]
pub async fn create(
    UserId(user): UserId,
    State(app): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateCategoryInput>, AppError>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = app.command.create_category(&user, input).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[tracing::instrument(skip(app))]
pub async fn remove(
    UserId(user): UserId,
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    app.command.delete_category(&user, &slug).await?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/categories?slug=...
pub async fn remove_by_query(
    user: UserId,
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<SlugQuery>, AppError>,
) -> Result<Json<Value>, AppError> {
    let Some(slug) = query.slug.filter(|s| !s.trim().is_empty()) else {
        return Err(AppError::BadRequest("slug is required".to_owned()));
    };

    remove(user, state, Path(slug)).await
}
