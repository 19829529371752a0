//! The publish validation rules.
//!
//! Each rule module exposes a `validate` that appends fixed-text
//! messages to the shared response; none of them mutates the item.

pub mod author;
pub mod body;
pub mod fields;
pub mod media;

/// A field value counts as missing when absent or empty.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
