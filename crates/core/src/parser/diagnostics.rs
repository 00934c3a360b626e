//! Parse diagnostics and the structured parse failure.
//!
//! A parse attempt accumulates zero or more diagnostics. Kinds are totally
//! ordered by declaration: the first declared kind has the highest
//! priority, and the highest-priority surviving diagnostic becomes the
//! headline reason. A critical diagnostic raises [`ParseError`], which
//! still carries the best-effort partial outcome so callers can decide to
//! use or reject it.

use serde::Serialize;
use thiserror::Error;

use super::parse::ParseOutcome;

/// Diagnostic severity. Warnings never block a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Warning,
    Critical,
}

/// Every kind of parse diagnostic, in priority order (highest first).
///
/// The declaration order is load-bearing: it drives both headline
/// selection and duplicate collapsing. Add new kinds in priority position,
/// not at the end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub enum DiagnosticKind {
    /// The `/NN` year does not continue the main year, or the date cannot
    /// be a double date at all.
    InvalidDoubleDate,
    /// Text that matched no recognized construct.
    Unparseable,
    MonthOutOfRange,
    DayOutOfRange,
    YearOutOfRange,
    /// 29 February of a non-leap year.
    InvalidLeapDay,
    /// The two ends of a range were entered latest-first and had to be
    /// reordered.
    RangeOrderSwapped,
    /// Two dates were found without an explicit range connector.
    MissingRangeConnector,
    /// A pre-cutover January-March date that might be a double date.
    AmbiguousDoubleDate,
    /// A double date was created automatically by policy.
    AutoResolvedDoubleDate,
    AmbiguousTwoDigitYear,
    AmbiguousOneDigitYear,
    /// The date lies after today.
    FutureDate,
    /// An era word inconsistent with the active vocabulary.
    EraVocabularyMismatch,
}

impl DiagnosticKind {
    /// The critical subset blocks a normal result; everything else is a
    /// warning on a best-effort value.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::InvalidDoubleDate
            | DiagnosticKind::Unparseable
            | DiagnosticKind::MonthOutOfRange
            | DiagnosticKind::DayOutOfRange
            | DiagnosticKind::YearOutOfRange
            | DiagnosticKind::InvalidLeapDay
            | DiagnosticKind::RangeOrderSwapped => Severity::Critical,
            _ => Severity::Warning,
        }
    }

    /// Human wording for the headline reason.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::InvalidDoubleDate => "invalid double date",
            DiagnosticKind::Unparseable => "unrecognized date text",
            DiagnosticKind::MonthOutOfRange => "month out of range",
            DiagnosticKind::DayOutOfRange => "day out of range",
            DiagnosticKind::YearOutOfRange => "year out of range",
            DiagnosticKind::InvalidLeapDay => "29 February of a non-leap year",
            DiagnosticKind::RangeOrderSwapped => {
                "range entered latest-first and reordered"
            }
            DiagnosticKind::MissingRangeConnector => {
                "two dates without a range connector"
            }
            DiagnosticKind::AmbiguousDoubleDate => "date may be a double date",
            DiagnosticKind::AutoResolvedDoubleDate => {
                "double date resolved automatically"
            }
            DiagnosticKind::AmbiguousTwoDigitYear => "ambiguous two-digit year",
            DiagnosticKind::AmbiguousOneDigitYear => "ambiguous one-digit year",
            DiagnosticKind::FutureDate => "date lies in the future",
            DiagnosticKind::EraVocabularyMismatch => {
                "era word inconsistent with the configured vocabulary"
            }
        }
    }
}

/// One recorded observation about a parse attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    pub kind: DiagnosticKind,
    /// The piece of input that triggered the diagnostic.
    pub offending_text: String,
    /// Whether the diagnostic applies to the second date of a range.
    pub second_date: bool,
}

impl ParseDiagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, offending_text: impl Into<String>) -> Self {
        Self { kind, offending_text: offending_text.into(), second_date: false }
    }

    #[must_use]
    pub fn on_second_date(mut self) -> Self {
        self.second_date = true;
        self
    }
}

/// Sort by priority, collapse duplicates of the same kind on the same
/// date, and return the headline (highest-priority) diagnostic.
pub(crate) fn prioritize(
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Option<ParseDiagnostic> {
    diagnostics.sort_by_key(|d| (d.kind, d.second_date));
    diagnostics.dedup_by_key(|d| (d.kind, d.second_date));
    diagnostics.first().cloned()
}

/// A recognized construct violated a hard validation rule.
///
/// The best-effort partial result is still available in `outcome`, along
/// with the full diagnostics list.
#[derive(Debug, Clone, Error)]
#[error("{}: {offending_text:?}", .reason.message())]
pub struct ParseError {
    /// The highest-priority critical diagnostic.
    pub reason: DiagnosticKind,
    pub offending_text: String,
    /// The best-effort outcome computed before the failure.
    pub outcome: ParseOutcome,
}
