/// Pressroom system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the vocabulary holding per-product validation masks.
pub const PRODUCTS_VOCABULARY: &str = "products";

/// Subject scheme that tags a product entry on an item.
pub const PRODUCTS_SCHEME: &str = "products";

/// Wire name of the 9-digit mask field on a vocabulary entry.
pub const MASK_FIELD: &str = "output_code";

/// Length of a valid validation mask string.
pub const MASK_LEN: usize = 9;

/// Association type identifying a picture.
pub const PICTURE_TYPE: &str = "picture";

/// Association key prefix identifying gallery pictures.
pub const GALLERY_PREFIX: &str = "gallery";

/// Supplier name (lowercased) whose pictures may not be published.
pub const AFP_SUPPLIER: &str = "afp";

/// Role name required of authors.
pub const JOURNALIST_ROLE: &str = "Journalist";

/// Extended headline limit for updates carrying a trailing "(<n>)" marker.
pub const UPDATE_HEADLINE_MAX_CHARS: usize = 64;

/// Body length ceilings, selected per product mask.
pub const BODY_LIMIT_SHORT: usize = 512;
pub const BODY_LIMIT_MEDIUM: usize = 2224;
pub const BODY_LIMIT_LONG: usize = 6400;

/// Body fallback when an item has no body at all.
pub const EMPTY_BODY_HTML: &str = "<p></p>";
