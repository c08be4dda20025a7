use axum::{Json, extract::State};

use crate::{
    error::AppError,
    routes::{AppState, UserId},
};

pub async fn list(
    UserId(user): UserId,
    State(app): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(app.query.tags(&user).await?))
}
