//! Required-field rules: headline, short title, subtitle, subject.

use pressroom_core::models::{NewsItem, PublishErrors, Rule, RuleMask};

use crate::messages;
use crate::rules::is_blank;

pub fn validate(item: &NewsItem, mask: &RuleMask, response: &mut PublishErrors) {
    if mask.is_active(Rule::HeadlineRequired) && is_blank(item.headline.as_deref()) {
        response.push(messages::HEADLINE_REQUIRED);
    }

    if mask.is_active(Rule::ShorttitleRequired) && is_blank(item.extra.shorttitle.as_deref()) {
        response.push(messages::SHORTTITLE_REQUIRED);
    }

    if mask.is_active(Rule::SubtitleRequired) && is_blank(item.extra.subtitle.as_deref()) {
        response.push(messages::SUBTITLE_REQUIRED);
    }

    // Only subjects with no scheme count; scheme-tagged entries are
    // product or custom vocabulary tags, not editorial subjects.
    if mask.is_active(Rule::SubjectRequired) && item.plain_subjects().next().is_none() {
        response.push(messages::SUBJECT_REQUIRED);
    }
}
