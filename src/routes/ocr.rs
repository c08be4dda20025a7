use axum::{
    Json,
    extract::{Multipart, State},
};
use axum_extra::extract::WithRejection;
use recipebook_ocr::{ImageData, RecipeDraft, extract_recipe};

use crate::{
    error::AppError,
    routes::{AppState, UserId},
};

/// POST /api/ocr - multipart upload with an `image` file and an optional
/// `form` field holding the draft typed so far as JSON.
///
/// Fields already present in `form` win over the extracted ones. A category
/// suggested by the model is created for the caller when missing and the
/// draft gets its slug.
#[tracing::instrument(skip_all, fields(user = %user))]
pub async fn extract(
    UserId(user): UserId,
    State(app): State<AppState>,
    WithRejection(mut multipart, _): WithRejection<Multipart, AppError>,
) -> Result<Json<RecipeDraft>, AppError> {
    let Some(vision) = app.vision.clone() else {
        return Err(AppError::Disabled(
            "photo extraction is not configured".to_owned(),
        ));
    };

    let mut image = None;
    let mut form = RecipeDraft::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("image") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_owned();
                let bytes = field.bytes().await?;
                image = Some(ImageData::new(mime_type, bytes.to_vec()));
            }
            Some("form") => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    form = serde_json::from_str(&text)
                        .map_err(|e| AppError::BadRequest(format!("invalid form: {e}")))?;
                }
            }
            _ => {}
        }
    }

    let Some(image) = image else {
        return Err(AppError::BadRequest("image field is required".to_owned()));
    };

    let mut draft = extract_recipe(&*vision, &image)
        .await?
        .merge_into(form);

    if let Some(slug) = app.command.ensure_category(&user, &draft.category).await? {
        draft.category = slug;
    }

    Ok(Json(draft))
}
