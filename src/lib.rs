use std::{sync::Arc, time::Duration};

use recipebook_ocr::{GeminiClient, VisionClient};
use sqlx::SqlitePool;

pub mod class_names;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

/// Builds the application state. The Gemini client is only created when an
/// OCR api key is configured.
pub fn build_state(
    config: config::Config,
    read_pool: SqlitePool,
    write_pool: SqlitePool,
) -> anyhow::Result<AppState> {
    let vision: Option<Arc<dyn VisionClient>> = if config.ocr.enabled() {
        Some(Arc::new(GeminiClient::new(
            config.ocr.api_key.to_owned(),
            config.ocr.model.to_owned(),
            config.ocr.endpoint.to_owned(),
            Duration::from_secs(config.ocr.timeout_secs),
        )?))
    } else {
        None
    };

    Ok(AppState {
        config,
        command: recipebook_recipe::Command::new(write_pool),
        query: recipebook_recipe::Query(read_pool.clone()),
        vision,
        pool: read_pool,
    })
}
