//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// SQLite connection string
    pub database_url: String,

    /// API key for the image generation service; placeholders only when unset
    pub gemini_api_key: Option<String>,
    /// Base URL of the image generation API
    pub imagen_base_url: String,
    /// Image model to request
    pub imagen_model: String,
    /// Upper bound on a single image generation call
    pub image_timeout: Duration,

    /// Enemies drawn from the roster when combat starts
    pub combat_enemy_count: usize,
    /// Player id used when a client initializes a game without one
    pub default_player_id: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:eldritch.db?mode=rwc".to_string()),

            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            imagen_base_url: env::var("IMAGEN_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            imagen_model: env::var("IMAGEN_MODEL")
                .unwrap_or_else(|_| "imagen-3.0-generate-002".to_string()),
            image_timeout: Duration::from_secs(
                env::var("IMAGE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("IMAGE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),

            combat_enemy_count: env::var("COMBAT_ENEMY_COUNT")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .context("COMBAT_ENEMY_COUNT must be a positive integer")?,
            default_player_id: env::var("DEFAULT_PLAYER_ID")
                .unwrap_or_else(|_| "demo_player".to_string()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            database_url: "sqlite::memory:".to_string(),
            gemini_api_key: None,
            imagen_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            imagen_model: "imagen-3.0-generate-002".to_string(),
            image_timeout: Duration::from_secs(30),
            combat_enemy_count: 2,
            default_player_id: "demo_player".to_string(),
        }
    }
}
