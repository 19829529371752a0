//! Read-only views of the user and role stores.

use serde::{Deserialize, Serialize};

/// A user record as returned by the user store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Id of the user's role, if any.
    pub role: Option<String>,
}

/// A role record as returned by the role store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}
