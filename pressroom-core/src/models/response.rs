//! The caller-owned validation response.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Error messages and fields-in-error accumulated across the publish
/// validation step.
///
/// The host pipeline owns one of these per publish attempt and hands
/// it to every validator in turn; earlier validators may already have
/// recorded entries when this module runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishErrors {
    messages: Vec<String>,
    fields: BTreeSet<String>,
}

impl PublishErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message without marking a field.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append a message and mark its field.
    pub fn push_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into());
        self.messages.push(message.into());
    }

    /// Remove the first occurrence of an exact message, if present.
    /// Returns whether anything was removed.
    pub fn remove_message(&mut self, message: &str) -> bool {
        match self.messages.iter().position(|m| m == message) {
            Some(pos) => {
                self.messages.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Unmark a field, if marked.
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.fields.remove(field)
    }

    /// Drop all messages and fields.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.fields.clear();
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.fields.is_empty()
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Fields currently marked in error.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_message_drops_only_first_occurrence() {
        let mut errors = PublishErrors::new();
        errors.push("dup");
        errors.push("other");
        errors.push("dup");

        assert!(errors.remove_message("dup"));
        assert_eq!(errors.messages(), ["other", "dup"]);
        assert!(!errors.remove_message("missing"));
    }

    #[test]
    fn clear_drops_everything() {
        let mut errors = PublishErrors::new();
        errors.push_field("headline", "Headline is required");
        errors.push("Subject is required");
        assert!(!errors.is_empty());

        errors.clear();
        assert!(errors.is_empty());
        assert_eq!(errors.fields().count(), 0);
    }
}
