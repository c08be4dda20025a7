use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRequestParts},
    http::request::Parts,
    routing::{delete, get, post},
};
use recipebook_ocr::VisionClient;
use recipebook_recipe::{Command, Query};
use sqlx::SqlitePool;

use crate::error::AppError;

mod card;
mod categories;
mod favorites;
mod health;
mod init;
mod ocr;
mod recipes;
mod tags;

/// Header carrying the caller's opaque user id.
pub const USER_HEADER: &str = "x-user-id";

/// Largest accepted photo upload.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: Command,
    pub query: Query,
    pub vision: Option<Arc<dyn VisionClient>>,
    pub pool: SqlitePool,
}

/// Caller identity from the `x-user-id` header, falling back to the
/// configured default user.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

impl FromRequestParts<AppState> for UserId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(state.config.app.default_user.as_str());

        if id == recipebook_db::SYSTEM_OWNER {
            return Err(AppError::BadRequest(format!("user id '{id}' is reserved")));
        }

        Ok(UserId(id.to_owned()))
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/api/recipes/{id}",
            get(recipes::detail)
                .put(recipes::update)
                .delete(recipes::remove),
        )
        .route(
            "/api/categories",
            get(categories::list)
                .post(categories::create)
                .delete(categories::remove_by_query),
        )
        .route("/api/categories/{slug}", delete(categories::remove))
        .route("/api/favorites", get(favorites::list).post(favorites::toggle))
        .route("/api/tags", get(tags::list))
        .route("/api/init", post(init::init))
        .route(
            "/api/ocr",
            post(ocr::extract).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .route("/recipes/{id}/card", get(card::card))
        .with_state(app_state)
}
