//! Rendering encoded dates to localized text.
//!
//! A [`DateFormatter`] pairs a [`crate::locale::Locale`] with
//! [`FormatOptions`] and renders any [`crate::encoding::EncodedDate`]
//! through a [`DatePattern`], either one of the named standard layouts or
//! a custom token string.

mod pattern;
mod render;

pub use pattern::{DatePattern, StandardPattern, Token};
pub use render::{DateFormatter, FormatOptions};
