//! Encoded date values: modifier flags, symbolic keywords, and the
//! tagged value type with its packed 32-bit interop form.

pub mod keyword;
pub mod modifiers;
pub mod value;

pub use keyword::DateKeyword;
pub use modifiers::{DateModifiers, Proximity};
pub use value::{
    EPOCH_ANCHOR_YEAR, EncodedDate, KEYWORD_TAG, MODIFIER_BITS, SORT_SENTINEL_YEAR,
    SdnDate,
};
