//! Image payloads attached to characters, enemies and scenes

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::{CharacterClass, EnemyKind};

/// An encoded image, either generated remotely or drawn locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub mime_type: String,
    /// Base64 encoded image bytes
    pub data: String,
}

impl GeneratedImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    #[cfg(test)]
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }
}

/// What an image depicts; drives prompt wording and placeholder art
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSubject {
    Character(CharacterClass),
    Enemy(EnemyKind),
    Background,
    UiElement,
}

impl ImageSubject {
    /// Map a loose `image_type` string ("character", "enemy", ...) to a subject.
    ///
    /// Unqualified character and enemy requests fall back to the detective and
    /// cultist art respectively.
    pub fn from_image_type(image_type: &str) -> Self {
        match image_type.trim().to_ascii_lowercase().as_str() {
            "character" => Self::Character(CharacterClass::Detective),
            "enemy" => Self::Enemy(EnemyKind::Cultist),
            "background" => Self::Background,
            _ => Self::UiElement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_base64() {
        let image = GeneratedImage::from_bytes("image/png", b"\x89PNG");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw==");
        assert_eq!(image.decode().unwrap(), b"\x89PNG".to_vec());
    }

    #[test]
    fn test_subject_from_image_type() {
        assert_eq!(
            ImageSubject::from_image_type("character"),
            ImageSubject::Character(CharacterClass::Detective)
        );
        assert_eq!(
            ImageSubject::from_image_type("Enemy"),
            ImageSubject::Enemy(EnemyKind::Cultist)
        );
        assert_eq!(ImageSubject::from_image_type("background"), ImageSubject::Background);
        assert_eq!(ImageSubject::from_image_type("ui_element"), ImageSubject::UiElement);
    }
}
