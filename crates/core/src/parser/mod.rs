//! Free-form date text parsing.
//!
//! [`DateParser`] turns phrases like "12 Feb 1699/00" or "Bet 1850 and
//! 1860" into encoded date values, accumulating diagnostics along the way.
//! Compile one parser per locale/options pair and share it; pattern
//! compilation happens once in [`DateParser::new`].

pub mod config;
pub mod diagnostics;
mod parse;
mod patterns;

pub use config::{AutoDoubleDatePolicy, ParserOptions, TwoDigitYearPolicy};
pub use diagnostics::{
    DiagnosticKind, ParseDiagnostic, ParseError, Severity,
};
pub use parse::{DateParser, ParseOutcome};
