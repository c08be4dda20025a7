use axum::{
    extract::{Path, State},
    response::Response,
};
use recipebook_recipe::Error;

use crate::{
    error::AppError,
    routes::{AppState, UserId},
    template::{RecipeCardTemplate, render},
};

#[tracing::instrument(skip(app))]
pub async fn card(
    UserId(user): UserId,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let recipe = app.query.find(&user, &id).await?.ok_or(Error::NotFound)?;

    Ok(render(RecipeCardTemplate::new(&recipe, "")))
}
