//! Image generation ports
//!
//! The remote generator may be slow, misconfigured or down; callers treat
//! every [`ImageGenerationError`] as "use a placeholder", never as fatal.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::value_objects::{GeneratedImage, ImageSubject};

#[derive(Debug, thiserror::Error)]
pub enum ImageGenerationError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("provider returned no image")]
    EmptyResponse,
    #[error("image generation is not configured")]
    Unavailable,
    #[error("image generation timed out after {0:?}")]
    Timeout(Duration),
}

/// Remote text-to-image generator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    /// Generate a single image for a fully styled prompt
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenerationError>;
}

/// Local fallback art drawn without any network access
#[cfg_attr(test, mockall::automock)]
pub trait PlaceholderImagePort: Send + Sync {
    fn render(&self, subject: ImageSubject) -> GeneratedImage;
}
