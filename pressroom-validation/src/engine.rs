//! PublishValidator — implements IPublishValidator, resolves the
//! product mask, runs every rule in order, and handles the two
//! special cases (auto-publish bypass, headline update marker).

use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;

use pressroom_core::config::ValidationSettings;
use pressroom_core::constants::UPDATE_HEADLINE_MAX_CHARS;
use pressroom_core::errors::PressroomResult;
use pressroom_core::models::{NewsItem, PublishErrors};
use pressroom_core::traits::{IPublishValidator, IRoleStore, IUserStore, IVocabularyStore};

use crate::mask;
use crate::messages;
use crate::rules;

/// Trailing update marker, e.g. "Quake latest (2)".
static UPDATE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([0-9]+\)$").unwrap());

/// The pre-publish validator.
///
/// Owns the read seams onto the vocabulary, user, and role stores;
/// everything else arrives per call. One instance serves any number of
/// sequential validation requests.
pub struct PublishValidator {
    settings: ValidationSettings,
    vocabularies: Arc<dyn IVocabularyStore>,
    users: Arc<dyn IUserStore>,
    roles: Arc<dyn IRoleStore>,
}

impl PublishValidator {
    pub fn new(
        settings: ValidationSettings,
        vocabularies: Arc<dyn IVocabularyStore>,
        users: Arc<dyn IUserStore>,
        roles: Arc<dyn IRoleStore>,
    ) -> Self {
        Self {
            settings,
            vocabularies,
            users,
            roles,
        }
    }

    /// Get the validator settings.
    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    /// Updates may keep a headline over the normal limit: when the
    /// headline ends with "(<n>)" and still fits the extended limit,
    /// the externally recorded length error is withdrawn.
    fn relax_updated_headline(item: &NewsItem, response: &mut PublishErrors) {
        let Some(headline) = item.headline.as_deref() else {
            return;
        };
        if UPDATE_MARKER_RE.is_match(headline)
            && headline.chars().count() <= UPDATE_HEADLINE_MAX_CHARS
            && response.contains(messages::HEADLINE_TOO_LONG)
        {
            response.remove_message(messages::HEADLINE_TOO_LONG);
            response.clear_field("headline");
        }
    }
}

impl IPublishValidator for PublishValidator {
    fn validate(&self, item: &NewsItem, response: &mut PublishErrors) -> PressroomResult<()> {
        // Auto-publish items ship unconditionally, including whatever
        // earlier validators already recorded.
        if item.auto_publish {
            response.clear();
            return Ok(());
        }

        let mask = mask::active_mask(item, &*self.vocabularies)?;

        Self::relax_updated_headline(item, response);

        rules::fields::validate(item, &mask, response);
        rules::body::validate(item, &mask, response);
        rules::media::validate(item, &mask, response);
        rules::author::validate(item, &*self.users, &*self.roles, &self.settings, response)?;

        Ok(())
    }
}
