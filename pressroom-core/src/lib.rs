//! # pressroom-core
//!
//! Foundation crate for the Pressroom publish validator.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ValidationSettings;
pub use errors::{PressroomError, PressroomResult};
pub use models::{NewsItem, PublishErrors, Rule, RuleMask};
