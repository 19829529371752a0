//! Configuration for publish validation.
//!
//! # Examples
//!
//! ```
//! use pressroom_core::config::ValidationSettings;
//!
//! let settings = ValidationSettings::default();
//! assert!(settings.validate_author);
//! assert_eq!(settings.journalist_role, "Journalist");
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::JOURNALIST_ROLE;
use crate::errors::{PressroomError, PressroomResult};

/// Settings for the publish validator.
///
/// Every field has a default, so a partial (or empty) TOML document is
/// a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Whether a missing author record blocks publishing. Default: true.
    /// When false, a missing author is logged and publishing proceeds.
    pub validate_author: bool,
    /// Role name required of authors. Default: "Journalist".
    pub journalist_role: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            validate_author: true,
            journalist_role: JOURNALIST_ROLE.to_string(),
        }
    }
}

impl ValidationSettings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(s: &str) -> PressroomResult<Self> {
        toml::from_str(s).map_err(|e| PressroomError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
