//! The nine publish validators and the per-product mask enabling them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MASK_LEN;

/// One of the nine configurable publish validators.
///
/// The discriminant is the character position in a vocabulary entry's
/// 9-digit `output_code` string; the positions are wire format and
/// must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum Rule {
    HeadlineRequired = 0,
    ShorttitleRequired = 1,
    SubtitleRequired = 2,
    SubjectRequired = 3,
    BodyLength512 = 4,
    BodyLength6400 = 5,
    BodyLength2224 = 6,
    FeaturedRequired = 7,
    GalleryRequired = 8,
}

impl Rule {
    /// All rules in mask-position order.
    pub const ALL: [Rule; MASK_LEN] = [
        Rule::HeadlineRequired,
        Rule::ShorttitleRequired,
        Rule::SubtitleRequired,
        Rule::SubjectRequired,
        Rule::BodyLength512,
        Rule::BodyLength6400,
        Rule::BodyLength2224,
        Rule::FeaturedRequired,
        Rule::GalleryRequired,
    ];

    /// Position of this rule in the mask string.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Set of enabled validators, decoded from 9-digit product codes.
///
/// Built fresh per validation call; merging masks from several
/// products is a plain OR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMask([bool; MASK_LEN]);

impl RuleMask {
    /// The empty mask: no validator enabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Decode a mask string: each `'1'` enables the rule at that
    /// position. Anything that is not exactly nine characters long
    /// decodes to the empty mask.
    pub fn decode(code: &str) -> Self {
        let mut mask = Self::default();
        if code.chars().count() != MASK_LEN {
            return mask;
        }
        for (i, c) in code.chars().enumerate() {
            if c == '1' {
                mask.0[i] = true;
            }
        }
        mask
    }

    /// Enable a single rule.
    pub fn activate(&mut self, rule: Rule) {
        self.0[rule.index()] = true;
    }

    /// Whether the given rule is enabled.
    pub fn is_active(&self, rule: Rule) -> bool {
        self.0[rule.index()]
    }

    /// OR another mask into this one.
    pub fn union(&mut self, other: RuleMask) {
        for (slot, enabled) in self.0.iter_mut().zip(other.0) {
            *slot |= enabled;
        }
    }

    /// Whether no validator is enabled.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&b| b)
    }
}

impl fmt::Display for RuleMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &enabled in &self.0 {
            write!(f, "{}", if enabled { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromIterator<Rule> for RuleMask {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut mask = Self::default();
        for rule in iter {
            mask.activate(rule);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_sets_positions_of_ones() {
        let mask = RuleMask::decode("100010001");
        assert!(mask.is_active(Rule::HeadlineRequired));
        assert!(mask.is_active(Rule::BodyLength512));
        assert!(mask.is_active(Rule::GalleryRequired));
        assert!(!mask.is_active(Rule::SubtitleRequired));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert!(RuleMask::decode("1111").is_empty());
        assert!(RuleMask::decode("1111111111").is_empty());
        assert!(RuleMask::decode("").is_empty());
    }

    #[test]
    fn union_is_an_or() {
        let mut mask = RuleMask::decode("100000000");
        mask.union(RuleMask::decode("000000001"));
        assert!(mask.is_active(Rule::HeadlineRequired));
        assert!(mask.is_active(Rule::GalleryRequired));
        assert_eq!(mask.to_string(), "100000001");
    }

    #[test]
    fn body_rules_sit_at_wire_positions() {
        // Positions 4/5/6 are 512/6400/2224 in that (wire) order.
        assert!(RuleMask::decode("000010000").is_active(Rule::BodyLength512));
        assert!(RuleMask::decode("000001000").is_active(Rule::BodyLength6400));
        assert!(RuleMask::decode("000000100").is_active(Rule::BodyLength2224));
    }

    proptest! {
        #[test]
        fn decoded_bits_match_one_positions(code in "[01]{9}") {
            let mask = RuleMask::decode(&code);
            for (i, c) in code.chars().enumerate() {
                prop_assert_eq!(mask.is_active(Rule::ALL[i]), c == '1');
            }
            // Display round-trips for pure 0/1 codes.
            prop_assert_eq!(mask.to_string(), code);
        }

        #[test]
        fn non_one_digits_never_enable(code in "[02-9]{9}") {
            prop_assert!(RuleMask::decode(&code).is_empty());
        }
    }
}
