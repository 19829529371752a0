//! In-memory implementations of the Pressroom store seams.
//!
//! These back the integration tests; production code talks to the
//! CMS-hosted stores through the same traits.

use pressroom_core::errors::PressroomResult;
use pressroom_core::models::{Role, User, Vocabulary};
use pressroom_core::traits::{IRoleStore, IUserStore, IVocabularyStore};

/// Vocabulary store over a fixed list of vocabularies.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabularyStore {
    vocabularies: Vec<Vocabulary>,
}

impl InMemoryVocabularyStore {
    pub fn new(vocabularies: Vec<Vocabulary>) -> Self {
        Self { vocabularies }
    }

    /// Load from a fixture file holding a JSON array of vocabularies.
    pub fn from_fixture(relative_path: &str) -> Self {
        Self::new(crate::load_fixture(relative_path))
    }
}

impl IVocabularyStore for InMemoryVocabularyStore {
    fn find_one(&self, id: &str) -> PressroomResult<Option<Vocabulary>> {
        Ok(self.vocabularies.iter().find(|v| v.id == id).cloned())
    }
}

/// User store over a fixed list of users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn from_fixture(relative_path: &str) -> Self {
        Self::new(crate::load_fixture(relative_path))
    }
}

impl IUserStore for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> PressroomResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

/// Role store over a fixed list of roles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleStore {
    roles: Vec<Role>,
}

impl InMemoryRoleStore {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn from_fixture(relative_path: &str) -> Self {
        Self::new(crate::load_fixture(relative_path))
    }
}

impl IRoleStore for InMemoryRoleStore {
    fn find_one(&self, id: &str) -> PressroomResult<Option<Role>> {
        Ok(self.roles.iter().find(|r| r.id == id).cloned())
    }
}
