//! # pressroom-validation
//!
//! Pre-publish validation for news items, driven by per-product
//! 9-digit rule masks from the products vocabulary.
//!
//! ## Rules
//! 1. **Fields** — headline, short title, subtitle, subject presence
//! 2. **Body** — character count against the 512/2224/6400 ceilings
//! 3. **Media** — featured photo, photo gallery, AFP supplier rejection
//! 4. **Author** — author (or co-author) must hold the journalist role
//!
//! Auto-publish items bypass everything; a headline carrying a
//! trailing update marker may shed an externally recorded
//! "too long" error.

pub mod engine;
pub mod mask;
pub mod messages;
pub mod rules;
pub mod text;

pub use engine::PublishValidator;
