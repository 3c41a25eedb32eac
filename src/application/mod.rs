//! Application layer - Use cases and port definitions
//!
//! Services here orchestrate domain objects and talk to the outside world
//! only through the outbound ports (image generation, persistence).

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;
