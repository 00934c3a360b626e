#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! A genealogical date engine.
//!
//! Parses free-form date phrases ("12 Feb 1699/00", "Bet 1850 and 1860",
//! "Abt 1900") into compact, sortable, calendar-agnostic values and renders
//! them back to localized text.
//!
//! The value model rests on the serial day number (SDN), a continuous day
//! count shared by the Gregorian and Julian calendars, so comparing dates
//! never needs calendar-specific arithmetic. Partial dates carry per-field
//! missing flags instead of fabricated components, and non-chronological
//! entries survive as keywords or raw text.
//!
//! ```
//! use gendate_core::parser::DateParser;
//!
//! let parser = DateParser::english();
//! let outcome = parser.parse("Bet 1850 and 1860")?;
//! let begin = outcome.first().unwrap();
//! assert_eq!(begin.year(), Some(1850));
//! assert_eq!(begin.month(), None);
//! # Ok::<(), gendate_core::parser::ParseError>(())
//! ```

pub mod calendar;
pub mod encoding;
pub mod formatter;
pub mod locale;
pub mod parser;

pub use calendar::Calendar;
pub use encoding::{DateKeyword, DateModifiers, EncodedDate, SdnDate};
pub use formatter::{DateFormatter, DatePattern, FormatOptions, StandardPattern};
pub use locale::{EraVocabulary, Locale};
pub use parser::{DateParser, ParseError, ParseOutcome, ParserOptions};

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
