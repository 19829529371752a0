use crate::errors::PressroomResult;
use crate::models::{NewsItem, PublishErrors};

/// Pre-publish item validation.
///
/// The host pipeline invokes this once per publish attempt, passing
/// the response accumulated by earlier validators; implementations
/// append to (or clear) it in place.
pub trait IPublishValidator: Send + Sync {
    fn validate(&self, item: &NewsItem, response: &mut PublishErrors) -> PressroomResult<()>;
}
