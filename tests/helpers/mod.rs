use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use recipebook::{
    AppState,
    config::{AppConfig, Config, DatabaseConfig, ObservabilityConfig, OcrConfig, ServerConfig},
};
use recipebook_ocr::VisionClient;
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config(path: &PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: format!("sqlite:{}", path.to_str().unwrap()),
            max_connections: 2,
        },
        app: AppConfig {
            default_user: "ana".to_string(),
        },
        ocr: OcrConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_app(
    path: PathBuf,
    vision: Option<Arc<dyn VisionClient>>,
) -> anyhow::Result<Router> {
    let config = test_config(&path);
    let pool = recipebook::db::create_pool(&config.database.url, 1).await?;
    recipebook_db::migrate(&pool).await?;

    let mut state: AppState = recipebook::build_state(config, pool.clone(), pool)?;
    state.command.seed_default_categories().await?;
    state.vision = vision;

    Ok(recipebook::routes::router(state))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<TestResponse> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let text = String::from_utf8(bytes.to_vec())?;
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);

    Ok(TestResponse { status, body, text })
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str, user: Option<&str>) -> anyhow::Result<TestResponse> {
    let mut request = Request::get(uri);
    if let Some(user) = user {
        request = request.header("x-user-id", user);
    }

    send(app, request.body(Body::empty())?).await
}

#[allow(dead_code)]
pub async fn json(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Value,
) -> anyhow::Result<TestResponse> {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        request = request.header("x-user-id", user);
    }

    send(app, request.body(Body::from(body.to_string()))?).await
}

#[allow(dead_code)]
pub async fn delete(app: &Router, uri: &str, user: Option<&str>) -> anyhow::Result<TestResponse> {
    let mut request = Request::delete(uri);
    if let Some(user) = user {
        request = request.header("x-user-id", user);
    }

    send(app, request.body(Body::empty())?).await
}
