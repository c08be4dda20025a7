use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ImageData, OcrError, VisionClient};

/// Vision client returning a canned reply, for tests and offline runs.
#[derive(Debug, Default)]
pub struct FakeVisionClient {
    reply: Option<String>,
    calls: Mutex<usize>,
}

impl FakeVisionClient {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Mutex::new(0),
        }
    }

    /// A client whose every call fails as an upstream error.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().map(|c| *c).unwrap_or_default()
    }
}

#[async_trait]
impl VisionClient for FakeVisionClient {
    async fn generate(&self, _prompt: &str, _image: &ImageData) -> Result<String, OcrError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }

        self.reply.clone().ok_or_else(|| OcrError::Api {
            status: 500,
            message: "fake client has no reply".to_owned(),
        })
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}
