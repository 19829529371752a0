//! The news item under validation, as seen on the wire.
//!
//! The validator only reads these structures; nothing here is ever
//! written back to the content store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A news content item at the pre-publish validation step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub headline: Option<String>,
    /// Tagged subject entries; entries with the products scheme select
    /// the active validation profile.
    pub subject: Vec<Subject>,
    pub body_html: Option<String>,
    pub extra: ItemExtra,
    /// Media references keyed by association name. Values can be null
    /// on the wire for removed associations.
    pub associations: BTreeMap<String, Option<MediaRef>>,
    /// When set, the item bypasses validation entirely.
    pub auto_publish: bool,
}

impl NewsItem {
    /// Subjects carrying no scheme, i.e. plain editorial subjects.
    pub fn plain_subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subject.iter().filter(|s| s.scheme.is_none())
    }

    /// Subjects tagged with the given scheme.
    pub fn subjects_with_scheme<'a>(
        &'a self,
        scheme: &'a str,
    ) -> impl Iterator<Item = &'a Subject> {
        self.subject
            .iter()
            .filter(move |s| s.scheme.as_deref() == Some(scheme))
    }
}

/// A tagged subject entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub qcode: String,
    pub name: Option<String>,
    pub scheme: Option<String>,
}

/// Free-form item extras. The fields the validator reads are typed;
/// everything else rides along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemExtra {
    pub shorttitle: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub coauthor: Option<String>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_json::Value>,
}

/// A media reference attached to an item association.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRef {
    #[serde(rename = "type")]
    pub item_type: String,
    pub extra: MediaExtra,
}

/// Supplier metadata on a media reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaExtra {
    pub supplier: Option<String>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let item: NewsItem = serde_json::from_str(
            r#"{
                "headline": "Storm hits coast",
                "subject": [
                    {"qcode": "17000000", "name": "weather"},
                    {"qcode": "fast-news", "scheme": "products"}
                ],
                "extra": {"shorttitle": "Storm", "desk_notes": "check wires"},
                "associations": {
                    "featuremedia": {"type": "picture", "extra": {"supplier": "ANSA"}},
                    "gallery--1": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(item.headline.as_deref(), Some("Storm hits coast"));
        assert_eq!(item.plain_subjects().count(), 1);
        assert_eq!(item.subjects_with_scheme("products").count(), 1);
        assert!(item.extra.rest.contains_key("desk_notes"));
        assert!(item.associations["gallery--1"].is_none());
        assert_eq!(
            item.associations["featuremedia"].as_ref().unwrap().item_type,
            "picture"
        );
        assert!(!item.auto_publish);
    }
}
