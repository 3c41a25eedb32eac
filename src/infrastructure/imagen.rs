//! Imagen client for AI image generation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{ImageGenerationError, ImageGenerationPort};
use crate::domain::value_objects::GeneratedImage;

/// Client for the Gemini API `:predict` endpoint of an Imagen model
pub struct ImagenClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl ImagenClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", self.base_url, self.model)
    }

    /// Request a single image for the prompt
    pub async fn predict(&self, prompt: &str) -> Result<PredictResponse, ImagenError> {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters { sample_count: 1 },
        };

        let response = self
            .client
            .post(self.predict_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(ImagenError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let predictions: PredictResponse = response.json().await?;
        Ok(predictions)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImagenError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

impl From<ImagenError> for ImageGenerationError {
    fn from(err: ImagenError) -> Self {
        match err {
            ImagenError::HttpError(e) => Self::Http(e.to_string()),
            ImagenError::ApiError { status, message } => Self::Api { status, message },
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub bytes_base64_encoded: Option<String>,
    pub mime_type: Option<String>,
}

impl PredictResponse {
    /// First prediction that actually carries image bytes
    pub fn into_first_image(self) -> Option<GeneratedImage> {
        self.predictions.into_iter().find_map(|p| {
            let data = p.bytes_base64_encoded.filter(|d| !d.is_empty())?;
            let mime_type = p.mime_type.unwrap_or_else(|| "image/png".to_string());
            Some(GeneratedImage::new(mime_type, data))
        })
    }
}

// =============================================================================
// ImageGenerationPort Implementations
// =============================================================================

#[async_trait]
impl ImageGenerationPort for ImagenClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenerationError> {
        tracing::info!(model = %self.model, "Generating image: {}", prompt);
        let response = self.predict(prompt).await?;
        response
            .into_first_image()
            .ok_or(ImageGenerationError::EmptyResponse)
    }
}

/// Generator used when no API key is configured; every call falls back
pub struct UnconfiguredImageGenerator;

#[async_trait]
impl ImageGenerationPort for UnconfiguredImageGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenerationError> {
        Err(ImageGenerationError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: "a shoggoth".to_string(),
            }],
            parameters: PredictParameters { sample_count: 1 },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["instances"][0]["prompt"], "a shoggoth");
        assert_eq!(json["parameters"]["sampleCount"], 1);
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"predictions":[{"bytesBase64Encoded":"aW1n","mimeType":"image/png"}]}"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();

        let image = response.into_first_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aW1n");
    }

    #[test]
    fn test_empty_response_has_no_image() {
        let response: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_first_image().is_none());

        let filtered: PredictResponse =
            serde_json::from_str(r#"{"predictions":[{"raiFilteredReason":"blocked"}]}"#).unwrap();
        assert!(filtered.into_first_image().is_none());
    }

    #[test]
    fn test_predict_url() {
        let client = ImagenClient::new("https://example.test/v1beta/", "imagen-3.0-generate-002", "k");
        assert_eq!(
            client.predict_url(),
            "https://example.test/v1beta/models/imagen-3.0-generate-002:predict"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_generator_is_unavailable() {
        let result = UnconfiguredImageGenerator.generate("anything").await;
        assert!(matches!(result, Err(ImageGenerationError::Unavailable)));
    }
}
