use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::{ImageGenerationRequestDto, ImageGenerationResponseDto};
use crate::domain::value_objects::ImageSubject;
use crate::infrastructure::state::AppState;

/// Generate an image from a free-form prompt; never fails once the prompt is accepted
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImageGenerationRequestDto>,
) -> Result<Json<ImageGenerationResponseDto>, (StatusCode, String)> {
    if req.prompt.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Prompt must not be empty".to_string()));
    }

    let outcome = state
        .image_service
        .generate_custom(
            &req.prompt,
            ImageSubject::from_image_type(&req.image_type),
            req.style_modifiers.as_deref(),
        )
        .await;

    Ok(Json(ImageGenerationResponseDto::from(outcome)))
}
