//! Recipe extraction from photos through a vision model.
//!
//! The model is asked for a loosely structured JSON object; whatever it
//! returns is mapped leniently onto a [`RecipeDraft`] the user can review.

mod client;
mod draft;
mod error;
mod extract;
mod fake;
mod gemini;
mod prompt;

pub use client::{ImageData, VisionClient};
pub use draft::RecipeDraft;
pub use error::OcrError;
pub use extract::{extract_json, extract_recipe};
pub use fake::FakeVisionClient;
pub use gemini::{DEFAULT_ENDPOINT, GeminiClient};
pub use prompt::RECIPE_PROMPT;
