//! Parser policy knobs.
//!
//! All options are read-mostly: build them once, hand them to
//! [`crate::parser::DateParser::new`], and share the parser across threads.

use serde::{Deserialize, Serialize};

use crate::locale::EraVocabulary;

/// How to resolve a year entered with only one or two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TwoDigitYearPolicy {
    /// Keep the literal value and record an ambiguity warning.
    #[default]
    Warn,
    /// Assume the current century ("26" parses as 2026 in 2026).
    CurrentCentury,
    /// Assume the previous century ("26" parses as 1926 in 2026).
    PreviousCentury,
}

/// Whether a pre-cutover date in the January-March window is silently
/// treated as a double date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoDoubleDatePolicy {
    /// Leave the date alone and record an ambiguity warning.
    #[default]
    Warn,
    /// Set the double-date flag and record that it was auto-resolved.
    Always,
    /// Leave the date alone silently.
    Never,
}

/// Immutable-after-construction parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Whether ambiguous numeric dates read day-first (12/02 = 12 Feb).
    /// Overrides the locale's own setting when set.
    #[serde(default)]
    pub day_before_month: Option<bool>,
    /// First year in which the Gregorian new year is assumed; double
    /// dates are only plausible strictly before it.
    #[serde(default = "default_cutover_year")]
    pub double_date_cutover_year: i32,
    #[serde(default)]
    pub two_digit_year: TwoDigitYearPolicy,
    #[serde(default)]
    pub auto_double_dates: AutoDoubleDatePolicy,
    /// Warn when an era word disagrees with the active vocabulary
    /// ("BCE" in a record configured for BC/AD).
    #[serde(default = "default_true")]
    pub warn_on_era_mismatch: bool,
    #[serde(default)]
    pub era_vocabulary: EraVocabulary,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            day_before_month: None,
            double_date_cutover_year: default_cutover_year(),
            two_digit_year: TwoDigitYearPolicy::default(),
            auto_double_dates: AutoDoubleDatePolicy::default(),
            warn_on_era_mismatch: default_true(),
            era_vocabulary: EraVocabulary::default(),
        }
    }
}

fn default_cutover_year() -> i32 {
    1753
}

fn default_true() -> bool {
    true
}
