use async_trait::async_trait;

use crate::OcrError;

/// Raw image bytes plus their MIME type, as received from the upload.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageData {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// A multimodal model that answers a text prompt about one image.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Returns the model's text reply.
    async fn generate(&self, prompt: &str, image: &ImageData) -> Result<String, OcrError>;

    fn model_name(&self) -> &str;
}
