use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::{ImageData, OcrError, VisionClient};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OcrError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OcrError::Request(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl VisionClient for GeminiClient {
    #[tracing::instrument(skip_all, fields(model = %self.model, bytes = image.bytes.len()))]
    async fn generate(&self, prompt: &str, image: &ImageData) -> Result<String, OcrError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text { text: prompt },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: &image.mime_type,
                            data: STANDARD.encode(&image.bytes),
                        },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| OcrError::Request(e.to_string()))?;

        if status != 200 {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            tracing::warn!(status, %message, "vision model call failed");

            return Err(OcrError::Api { status, message });
        }

        let response: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| OcrError::Parse(e.to_string()))?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(OcrError::Parse("no text in model reply".to_owned()));
        }

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_inline_data() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text { text: "hola" },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png",
                            data: STANDARD.encode([1u8, 2, 3]),
                        },
                    },
                ],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        {"text": "hola"},
                        {"inline_data": {"mime_type": "image/png", "data": "AQID"}}
                    ]
                }]
            })
        );
    }

    #[test]
    fn url_trims_trailing_slash() {
        let client = GeminiClient::new(
            "key",
            "gemini-2.0-flash",
            "http://localhost:9000/v1beta/",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.url(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn response_text_parts_are_joined() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"title\":"},{"text":"\"Sopa\"}"}]}}]}"#,
        )
        .unwrap();

        let text: String = response.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .filter_map(|p| p.text.clone())
            .collect();

        assert_eq!(text, r#"{"title":"Sopa"}"#);
    }
}
