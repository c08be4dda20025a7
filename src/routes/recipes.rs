use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::{Query, WithRejection};
use recipebook_recipe::{CreateInput, Difficulty, Error, Recipe, RecipeFilter, UpdateInput};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    routes::{AppState, UserId},
};

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub min_rating: Option<f64>,
    /// Comma separated tag names
    pub tags: Option<String>,
    pub max_time: Option<u32>,
}

impl TryFrom<ListQuery> for RecipeFilter {
    type Error = AppError;

    fn try_from(query: ListQuery) -> Result<Self, Self::Error> {
        let difficulty = match query.difficulty.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(Difficulty::from_loose(value).ok_or_else(|| {
                AppError::BadRequest(format!("unknown difficulty '{value}'"))
            })?),
        };

        Ok(RecipeFilter {
            search: query.search,
            category: query.category,
            difficulty,
            min_rating: query.min_rating,
            tags: query
                .tags
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect(),
            max_total_time: query.max_time,
        })
    }
}

#[tracing::instrument(skip(app))]
pub async fn list(
    UserId(user): UserId,
    State(app): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListQuery>, AppError>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let filter = RecipeFilter::try_from(query)?;

    Ok(Json(app.query.filter(&user, &filter).await?))
}

#[tracing::instrument(skip_all, fields(user = %user))]
pub async fn create(
    UserId(user): UserId,
    State(app): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateInput>, AppError>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = app.command.create(&user, input).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[tracing::instrument(skip(app))]
pub async fn detail(
    UserId(user): UserId,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = app.query.find(&user, &id).await?.ok_or(Error::NotFound)?;

    Ok(Json(recipe))
}

#[tracing::instrument(skip(app, input))]
pub async fn update(
    UserId(user): UserId,
    State(app): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(input), _): WithRejection<Json<UpdateInput>, AppError>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(app.command.update(&user, &id, input).await?))
}

#[tracing::instrument(skip(app))]
pub async fn remove(
    UserId(user): UserId,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    app.command.delete(&user, &id).await?;

    Ok(Json(json!({ "success": true })))
}
