use axum::{Json, extract::State};
use recipebook_recipe::category::DEFAULT_CATEGORIES;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

/// POST /api/init - applies pending migrations and seeds the default
/// categories. Safe to call repeatedly.
#[tracing::instrument(skip_all)]
pub async fn init(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    recipebook_db::migrate(&app.command.write_db).await?;
    app.command.seed_default_categories().await?;

    Ok(Json(json!({
        "success": true,
        "defaultCategories": DEFAULT_CATEGORIES.len(),
    })))
}
