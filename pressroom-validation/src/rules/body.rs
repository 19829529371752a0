//! Body length rule.
//!
//! The three ceilings are mutually exclusive: the chain checks 512
//! first, else 2224, else 6400, so at most one message is appended
//! even when several ceilings are enabled.

use pressroom_core::constants::{
    BODY_LIMIT_LONG, BODY_LIMIT_MEDIUM, BODY_LIMIT_SHORT, EMPTY_BODY_HTML,
};
use pressroom_core::models::{NewsItem, PublishErrors, Rule, RuleMask};

use crate::messages;
use crate::text;

pub fn validate(item: &NewsItem, mask: &RuleMask, response: &mut PublishErrors) {
    let length = text::char_count(item.body_html.as_deref().unwrap_or(EMPTY_BODY_HTML));

    if mask.is_active(Rule::BodyLength512) && length > BODY_LIMIT_SHORT {
        response.push(messages::body_too_long(BODY_LIMIT_SHORT));
    } else if mask.is_active(Rule::BodyLength2224) && length > BODY_LIMIT_MEDIUM {
        response.push(messages::body_too_long(BODY_LIMIT_MEDIUM));
    } else if mask.is_active(Rule::BodyLength6400) && length > BODY_LIMIT_LONG {
        response.push(messages::body_too_long(BODY_LIMIT_LONG));
    }
}
