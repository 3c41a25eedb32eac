//! Data Transfer Objects - For API boundaries
//!
//! Request bodies and response envelopes for the HTTP layer. Domain
//! entities already carry their wire names, so responses embed them directly.

pub mod character;
pub mod combat;
pub mod game;
pub mod image;
pub mod status;

pub use character::*;
pub use combat::*;
pub use game::*;
pub use image::*;
pub use status::*;
