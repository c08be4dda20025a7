use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("image is empty")]
    EmptyImage,

    #[error("request failed: {0}")]
    Request(String),

    #[error("model returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse model reply: {0}")]
    Parse(String),
}
