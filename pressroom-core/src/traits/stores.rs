//! Read seams onto the external vocabulary, user, and role stores.
//!
//! All lookups are simple point reads: a missing record is `Ok(None)`,
//! and only transport-level failures surface as errors. Retries,
//! timeouts, and caching are the stores' concern, not ours.

use crate::errors::PressroomResult;
use crate::models::{Role, User, Vocabulary};

/// Vocabulary lookup by id.
pub trait IVocabularyStore: Send + Sync {
    fn find_one(&self, id: &str) -> PressroomResult<Option<Vocabulary>>;
}

/// User lookup by username.
pub trait IUserStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> PressroomResult<Option<User>>;
}

/// Role lookup by id.
pub trait IRoleStore: Send + Sync {
    fn find_one(&self, id: &str) -> PressroomResult<Option<Role>>;
}
