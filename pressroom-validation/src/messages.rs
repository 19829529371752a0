//! Fixed error texts appended to the publish response.
//!
//! These strings are shown to editors verbatim and matched on by
//! downstream tooling; treat them as wire format.

pub const HEADLINE_REQUIRED: &str = "Headline is required";
pub const SHORTTITLE_REQUIRED: &str = "Short Title is required";
pub const SUBTITLE_REQUIRED: &str = "Subtitle is required";
pub const SUBJECT_REQUIRED: &str = "Subject is required";

pub const FEATURED_REQUIRED: &str = "Photo is required";
pub const GALLERY_REQUIRED: &str = "Photo gallery is required";
pub const AFP_IMAGE_USAGE: &str = "AFP images could not be used";

pub const AUTHOR_NOT_FOUND: &str = "Author could not be found";
pub const AUTHOR_NOT_JOURNALIST: &str = "Author is not Journalist";
pub const COAUTHOR_NOT_FOUND: &str = "Co-Author could not be found";
pub const COAUTHOR_NOT_JOURNALIST: &str = "Co-Author is not Journalist";

/// Recorded by the host pipeline's own length check, before this
/// module runs. The update-marker override removes it.
pub const HEADLINE_TOO_LONG: &str = "HEADLINE is too long";

/// Body ceiling message, parameterized by the active limit.
pub fn body_too_long(limit: usize) -> String {
    format!("Body is longer than {limit} characters")
}
