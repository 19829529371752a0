//! Builds the active rule mask from an item's product tags.

use pressroom_core::constants::{PRODUCTS_SCHEME, PRODUCTS_VOCABULARY};
use pressroom_core::errors::PressroomResult;
use pressroom_core::models::{NewsItem, RuleMask};
use pressroom_core::traits::IVocabularyStore;
use std::collections::BTreeSet;

/// Resolve the set of enabled validators for an item.
///
/// Product tags are the item's subjects with the products scheme; each
/// matching vocabulary entry with a well-formed 9-digit code ORs its
/// rules in. No products, no vocabulary, or no matching entries all
/// yield the empty mask.
pub fn active_mask(
    item: &NewsItem,
    vocabularies: &dyn IVocabularyStore,
) -> PressroomResult<RuleMask> {
    let mut mask = RuleMask::none();

    let codes: BTreeSet<&str> = item
        .subjects_with_scheme(PRODUCTS_SCHEME)
        .map(|s| s.qcode.as_str())
        .collect();
    if codes.is_empty() {
        return Ok(mask);
    }

    let Some(vocabulary) = vocabularies.find_one(PRODUCTS_VOCABULARY)? else {
        return Ok(mask);
    };

    for entry in &vocabulary.items {
        if codes.contains(entry.qcode.as_str()) {
            if let Some(decoded) = entry.mask() {
                mask.union(decoded);
            }
        }
    }

    Ok(mask)
}
