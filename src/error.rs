use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::QueryRejection;
use recipebook_ocr::OcrError;
use recipebook_recipe::Error as RecipeError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Recipe(#[from] RecipeError),

    #[error("{0}")]
    Ocr(#[from] OcrError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Disabled(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(err: MultipartRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Recipe(RecipeError::Validate(_) | RecipeError::Invalid(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Recipe(RecipeError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Recipe(RecipeError::Forbidden(_)) => StatusCode::FORBIDDEN,
            AppError::Recipe(RecipeError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Recipe(RecipeError::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Ocr(OcrError::EmptyImage) => StatusCode::BAD_REQUEST,
            AppError::Ocr(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Disabled(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");

            match &self {
                AppError::Ocr(e) => format!("could not read the recipe from the photo: {e}"),
                AppError::Disabled(msg) => msg.to_owned(),
                _ => "Internal server error".to_owned(),
            }
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Recipe(RecipeError::Invalid("x".into())), 400),
            (AppError::Recipe(RecipeError::NotFound), 404),
            (AppError::Recipe(RecipeError::Forbidden("x".into())), 403),
            (AppError::Recipe(RecipeError::Conflict("x".into())), 409),
            (AppError::Ocr(OcrError::Parse("x".into())), 502),
            (AppError::Ocr(OcrError::EmptyImage), 400),
            (AppError::Disabled("x".into()), 503),
            (AppError::Internal(anyhow::anyhow!("boom")), 500),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code().as_u16(), status, "{error:?}");
        }
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = AppError::Internal(anyhow::anyhow!("secret path")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}
