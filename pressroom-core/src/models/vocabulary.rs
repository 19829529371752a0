//! Read-only view of the vocabulary store.

use serde::{Deserialize, Serialize};

use crate::constants::MASK_LEN;
use crate::models::RuleMask;

/// A controlled vocabulary, e.g. the `products` vocabulary that maps
/// product codes to validation masks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    #[serde(rename = "_id")]
    pub id: String,
    pub items: Vec<VocabularyEntry>,
}

/// One entry of a controlled vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyEntry {
    pub qcode: String,
    pub name: Option<String>,
    /// 9-digit validator mask for product entries. Entries without a
    /// well-formed code contribute nothing to the active mask.
    pub output_code: Option<String>,
}

impl VocabularyEntry {
    /// Decode this entry's mask, if it carries a well-formed code.
    pub fn mask(&self) -> Option<RuleMask> {
        let code = self.output_code.as_deref()?;
        if code.chars().count() != MASK_LEN {
            return None;
        }
        Some(RuleMask::decode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rule;

    #[test]
    fn entry_mask_requires_nine_characters() {
        let mut entry = VocabularyEntry {
            qcode: "fast-news".into(),
            name: None,
            output_code: Some("111".into()),
        };
        assert!(entry.mask().is_none());

        entry.output_code = Some("010000000".into());
        let mask = entry.mask().unwrap();
        assert!(mask.is_active(Rule::ShorttitleRequired));
    }

    #[test]
    fn entry_without_code_has_no_mask() {
        assert!(VocabularyEntry::default().mask().is_none());
    }
}
