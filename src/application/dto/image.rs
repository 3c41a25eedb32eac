use serde::{Deserialize, Serialize};

use crate::application::services::ImageOutcome;

#[derive(Debug, Deserialize)]
pub struct ImageGenerationRequestDto {
    pub prompt: String,
    /// "character", "enemy", "background" or "ui_element"
    pub image_type: String,
    #[serde(default)]
    pub style_modifiers: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationResponseDto {
    pub success: bool,
    pub image_base64: Option<String>,
    pub mime_type: Option<String>,
    /// Set when the remote generator failed and a placeholder was drawn instead
    pub error_message: Option<String>,
}

impl From<ImageOutcome> for ImageGenerationResponseDto {
    fn from(outcome: ImageOutcome) -> Self {
        let error_message = (!outcome.is_generated())
            .then(|| "Image generation unavailable, placeholder returned".to_string());
        let image = outcome.into_image();
        Self {
            success: true,
            image_base64: Some(image.data),
            mime_type: Some(image.mime_type),
            error_message,
        }
    }
}
