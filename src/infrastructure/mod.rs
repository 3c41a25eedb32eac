//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite adapter for sessions, characters and combats
//! - HTTP: REST API routes
//! - Imagen: remote image generation
//! - Placeholder: locally drawn fallback art
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod imagen;
pub mod persistence;
pub mod placeholder;
pub mod state;
