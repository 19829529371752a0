//! Media rules: featured photo, photo gallery, AFP supplier rejection.

use pressroom_core::constants::{AFP_SUPPLIER, GALLERY_PREFIX, PICTURE_TYPE};
use pressroom_core::models::{MediaRef, NewsItem, PublishErrors, Rule, RuleMask};

pub fn validate(item: &NewsItem, mask: &RuleMask, response: &mut PublishErrors) {
    // Null association values are removed media; skip them.
    let pictures: Vec<&MediaRef> = item
        .associations
        .values()
        .flatten()
        .filter(|media| media.item_type == PICTURE_TYPE)
        .collect();

    let has_gallery = item.associations.iter().any(|(key, media)| {
        key.starts_with(GALLERY_PREFIX)
            && media
                .as_ref()
                .is_some_and(|m| m.item_type == PICTURE_TYPE)
    });

    if mask.is_active(Rule::FeaturedRequired) && pictures.is_empty() {
        response.push(crate::messages::FEATURED_REQUIRED);
    }

    if mask.is_active(Rule::GalleryRequired) && !has_gallery {
        response.push(crate::messages::GALLERY_REQUIRED);
    }

    // Supplier embargo applies regardless of the mask; one message is
    // enough however many AFP pictures are attached.
    if pictures.iter().any(is_afp_sourced) {
        response.push(crate::messages::AFP_IMAGE_USAGE);
    }
}

fn is_afp_sourced(media: &&MediaRef) -> bool {
    media
        .extra
        .supplier
        .as_deref()
        .is_some_and(|supplier| supplier.eq_ignore_ascii_case(AFP_SUPPLIER))
}
