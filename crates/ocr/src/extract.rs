use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{ImageData, OcrError, RECIPE_PROMPT, RecipeDraft, VisionClient};

static RE_JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Pulls the outermost `{...}` span out of a model reply (which may wrap it
/// in prose or a code fence) and parses it.
pub fn extract_json(text: &str) -> Result<Value, OcrError> {
    let Some(found) = RE_JSON_OBJECT.find(text) else {
        return Err(OcrError::Parse("no JSON object in model reply".to_owned()));
    };

    serde_json::from_str(found.as_str()).map_err(|e| OcrError::Parse(e.to_string()))
}

/// Sends the photo to the model and maps its reply onto a draft.
#[tracing::instrument(skip_all, fields(model = client.model_name(), bytes = image.bytes.len()))]
pub async fn extract_recipe(
    client: &dyn VisionClient,
    image: &ImageData,
) -> Result<RecipeDraft, OcrError> {
    if image.bytes.is_empty() {
        return Err(OcrError::EmptyImage);
    }

    let reply = client.generate(RECIPE_PROMPT, image).await?;
    let value = extract_json(&reply)?;
    let draft = RecipeDraft::from_value(&value);

    tracing::info!(
        title = %draft.title,
        ingredients = draft.ingredients.len(),
        instructions = draft.instructions.len(),
        "recipe extracted from photo"
    );

    Ok(draft)
}
