//! The date text parsing pipeline.
//!
//! Stages: keyword short-circuit, qualifier stripping, cascading leaf
//! patterns, range disambiguation, post-validation, and diagnostic
//! prioritization. Merely-unparseable text never raises; it falls back to
//! [`EncodedDate::Text`]. A recognized construct that violates a hard
//! validation rule raises [`ParseError`], which still carries the
//! best-effort partial outcome.

use chrono::Datelike;
use regex::Regex;
use serde::Serialize;

use super::config::{AutoDoubleDatePolicy, ParserOptions, TwoDigitYearPolicy};
use super::diagnostics::{
    DiagnosticKind, ParseDiagnostic, ParseError, Severity, prioritize,
};
use super::patterns::{LeafPattern, MatchedFields, build_patterns, extract_fields};
use crate::calendar::{Calendar, days_in_month, gregorian_to_sdn, is_leap_year};
use crate::encoding::{DateKeyword, DateModifiers, EncodedDate, SdnDate};
use crate::locale::Locale;

/// The result of one parse attempt.
///
/// `matched` is false when nothing in the input was recognized; the value
/// is then the raw-text fallback. Warnings never clear `matched`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub matched: bool,
    /// The combined best-effort value: a single date, keyword, range, or
    /// the raw-text fallback.
    pub value: Option<EncodedDate>,
    /// Modifiers resolved from leading qualifier words.
    pub modifiers: DateModifiers,
    /// All surviving diagnostics, highest priority first.
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseOutcome {
    fn empty() -> Self {
        Self {
            matched: false,
            value: None,
            modifiers: DateModifiers::NONE,
            diagnostics: Vec::new(),
        }
    }

    /// The first (or only) concrete date.
    #[must_use]
    pub fn first(&self) -> Option<SdnDate> {
        match &self.value {
            Some(EncodedDate::Sdn(date)) => Some(*date),
            Some(EncodedDate::Range { begin, .. }) => Some(*begin),
            _ => None,
        }
    }

    /// The second date; present only for ranges.
    #[must_use]
    pub fn second(&self) -> Option<SdnDate> {
        match &self.value {
            Some(EncodedDate::Range { end, .. }) => Some(*end),
            _ => None,
        }
    }

    /// The highest-priority diagnostic, if any.
    #[must_use]
    pub fn headline(&self) -> Option<&ParseDiagnostic> {
        self.diagnostics.first()
    }

    /// The worst severity across all diagnostics.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.kind.severity()).max()
    }
}

/// One partially assembled date, accumulated across leaf matches.
#[derive(Debug, Clone, Default)]
struct PartialDate {
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    year_digits: u8,
    dual: Option<u32>,
    era: Option<super::patterns::EraMatch>,
    quarter: Option<u32>,
    /// Byte offset of the earliest contributing match, for textual order.
    first_pos: usize,
}

impl PartialDate {
    fn is_empty(&self) -> bool {
        self.day.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.quarter.is_none()
    }

    fn conflicts_with(&self, fields: &MatchedFields) -> bool {
        (self.day.is_some() && fields.day.is_some())
            || (self.month.is_some() && fields.month.is_some())
            || (self.year.is_some() && fields.year.is_some())
            || (self.quarter.is_some()
                && (fields.quarter.is_some() || fields.month.is_some()))
            || (self.month.is_some() && fields.quarter.is_some())
            || (self.dual.is_some() && fields.dual.is_some())
    }

    fn absorb(&mut self, fields: MatchedFields, pos: usize) {
        if self.is_empty() || pos < self.first_pos {
            self.first_pos = pos;
        }
        if fields.day.is_some() {
            self.day = fields.day;
        }
        if fields.month.is_some() {
            self.month = fields.month;
        }
        if fields.year.is_some() {
            self.year = fields.year;
            self.year_digits = fields.year_digits;
        }
        if fields.dual.is_some() {
            self.dual = fields.dual;
        }
        if fields.era.is_some() {
            self.era = fields.era;
        }
        if fields.quarter.is_some() {
            self.quarter = fields.quarter;
        }
    }
}

struct CascadeResult {
    slots: Vec<PartialDate>,
    /// The working string with every consumed span blanked out.
    residue: String,
    /// Text that matched a pattern but fit neither date slot.
    overflow: Vec<String>,
}

/// A compiled, shareable date parser.
///
/// Construction compiles the locale-specific pattern cascade once; the
/// parser itself is read-only afterwards and safe to share across threads.
pub struct DateParser {
    locale: Locale,
    options: ParserOptions,
    patterns: Vec<LeafPattern>,
    connector: Regex,
}

impl DateParser {
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // the built patterns are static
    pub fn new(locale: Locale, options: ParserOptions) -> Self {
        let day_first =
            options.day_before_month.unwrap_or(locale.day_before_month);
        let patterns = build_patterns(&locale, day_first);
        let words = locale
            .range_connectors
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let connector = Regex::new(&format!(r"(?i)\b(?:{words})\b|–|—|-"))
            .expect("valid connector pattern");
        Self { locale, options, patterns, connector }
    }

    /// A parser with the English locale and default options.
    #[must_use]
    pub fn english() -> Self {
        Self::new(Locale::english(), ParserOptions::default())
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a free-form date phrase.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when a recognized construct violates a hard
    /// validation rule (the critical diagnostic kinds). The error carries
    /// the full diagnostics list and the best-effort partial outcome.
    #[allow(clippy::too_many_lines)]
    pub fn parse(&self, text: &str) -> Result<ParseOutcome, ParseError> {
        let raw = text.trim();
        if raw.is_empty() {
            return Ok(ParseOutcome::empty());
        }

        // Stage 1: keyword short-circuit.
        if let Some(keyword) = DateKeyword::lookup(raw) {
            return Ok(ParseOutcome {
                matched: true,
                value: Some(EncodedDate::Keyword(keyword)),
                modifiers: DateModifiers::NONE,
                diagnostics: Vec::new(),
            });
        }

        // Stage 2: qualifier stripping.
        let (working, qualifier_mods) = self.strip_qualifiers(raw);
        let mut diagnostics: Vec<ParseDiagnostic> = Vec::new();

        // Stage 4: cascading leaf patterns.
        let mut cascade = self.run_cascade(working);

        // Stage 3/5: connector detection and range disambiguation. The
        // connector is looked for in the residue, where every consumed
        // date span has already been blanked out, so a hyphen inside
        // "12-02-1900" can never count as one.
        let connector_span = self
            .connector
            .find(&cascade.residue)
            .map(|m| (m.start(), m.end()));

        if let Some((start, end)) = connector_span
            && cascade.slots.len() == 1
        {
            // A connector with only one combined date: split the phrase
            // and parse each half independently.
            let left = self.run_cascade(&working[..start]);
            let mut right = self.run_cascade(&working[end..]);
            for slot in &mut right.slots {
                slot.first_pos += end;
            }
            if left.slots.len() == 1 && right.slots.len() == 1 {
                tracing::trace!("range split at connector");
                let mut slots = left.slots;
                slots.extend(right.slots);
                cascade = CascadeResult {
                    slots,
                    residue: format!("{} {}", left.residue, right.residue),
                    overflow: cascade.overflow,
                };
            }
        }

        let mut residue = cascade.residue;
        while let Some(m) = self.connector.find(&residue) {
            let blank = " ".repeat(m.end() - m.start());
            residue.replace_range(m.range(), &blank);
        }

        for junk in &cascade.overflow {
            diagnostics
                .push(ParseDiagnostic::new(DiagnosticKind::Unparseable, junk));
        }

        let mut slots = cascade.slots;
        let matched = !slots.is_empty();

        // Stage 6a: leftover unrecognized characters.
        let junk: String = residue
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | ';'))
            .collect();
        let junk = junk.trim();
        if matched && !junk.is_empty() {
            diagnostics
                .push(ParseDiagnostic::new(DiagnosticKind::Unparseable, junk));
        }

        if !matched {
            tracing::debug!(input = raw, "no date construct recognized");
            let mut diags =
                vec![ParseDiagnostic::new(DiagnosticKind::Unparseable, raw)];
            prioritize(&mut diags);
            return Ok(ParseOutcome {
                matched: false,
                value: Some(EncodedDate::Text(raw.to_string())),
                modifiers: qualifier_mods,
                diagnostics: diags,
            });
        }

        // Stage 5b: textual order, then year propagation across the pair.
        slots.sort_by_key(|slot| slot.first_pos);
        if slots.len() == 2 {
            if slots[0].year.is_some() && slots[1].year.is_none() {
                slots[1].year = slots[0].year;
                slots[1].year_digits = slots[0].year_digits;
            } else if slots[1].year.is_some() && slots[0].year.is_none() {
                slots[0].year = slots[1].year;
                slots[0].year_digits = slots[1].year_digits;
            }
            // A leading between-word is not an explicit connector; the
            // joining word or dash itself has to be present.
            if connector_span.is_none() {
                diagnostics.push(ParseDiagnostic::new(
                    DiagnosticKind::MissingRangeConnector,
                    raw,
                ));
            }
        }

        // Stage 6b: per-date validation and encoding.
        let mut dates: Vec<SdnDate> = Vec::new();
        for (index, slot) in slots.iter().enumerate() {
            dates.push(self.finalize(slot, index == 1, &mut diagnostics));
        }

        // Stage 5c: order the pair earliest-first, on the same key the
        // Ord impl sorts by so year-missing endpoints compare by month.
        if dates.len() == 2
            && dates[0].sort_key() > dates[1].sort_key()
            && dates[1].sdn() != 0
        {
            dates.swap(0, 1);
            diagnostics.push(
                ParseDiagnostic::new(DiagnosticKind::RangeOrderSwapped, raw)
                    .on_second_date(),
            );
        }

        // Stage 6c: a date later than today.
        let today = today_sdn();
        if let Some(last) = dates.last()
            && last.sdn() > today
            && !last.modifiers().contains(DateModifiers::YEAR_MISSING)
        {
            diagnostics
                .push(ParseDiagnostic::new(DiagnosticKind::FutureDate, raw));
        }

        let value = if dates.len() == 2 {
            EncodedDate::Range { begin: dates[0], end: dates[1] }
        } else {
            let single = dates[0];
            EncodedDate::Sdn(
                single.with_modifiers(single.modifiers() | qualifier_mods),
            )
        };

        // Stage 7: prioritization and severity.
        let headline = prioritize(&mut diagnostics);
        let outcome = ParseOutcome {
            matched: true,
            value: Some(value),
            modifiers: qualifier_mods,
            diagnostics,
        };
        match headline {
            Some(diag) if diag.kind.severity() == Severity::Critical => {
                Err(ParseError {
                    reason: diag.kind,
                    offending_text: diag.offending_text,
                    outcome,
                })
            }
            _ => Ok(outcome),
        }
    }

    /// Peel recognized qualifier words off the front of the phrase.
    fn strip_qualifiers<'a>(&self, text: &'a str) -> (&'a str, DateModifiers) {
        let mut rest = text.trim_start_matches('?').trim_start();
        let mut modifiers = DateModifiers::NONE;

        loop {
            let Some(token) = rest.split_whitespace().next() else { break };
            let word = token.trim_end_matches('.').to_lowercase();
            let flag = if self.locale.before_words.contains(&word) {
                Some(DateModifiers::BEFORE)
            } else if self.locale.after_words.contains(&word) {
                Some(DateModifiers::AFTER)
            } else if self.locale.about_words.contains(&word) {
                Some(DateModifiers::ABOUT)
            } else if self.locale.calculated_words.contains(&word) {
                Some(DateModifiers::CALCULATED)
            } else if self.locale.between_words.contains(&word) {
                // Stripped but carries no modifier; the range shows up as
                // two dates further down.
                Some(DateModifiers::NONE)
            } else {
                None
            };
            match flag {
                Some(flag) => {
                    modifiers.insert(flag);
                    rest = rest[token.len()..].trim_start();
                }
                None => break,
            }
        }
        (rest, modifiers)
    }

    /// Repeatedly take the most specific leaf match and merge its fields
    /// into the first date that has room for them.
    fn run_cascade(&self, text: &str) -> CascadeResult {
        let mut work = text.to_string();
        let mut slots: Vec<PartialDate> = Vec::new();
        let mut overflow: Vec<String> = Vec::new();

        loop {
            let mut hit: Option<(usize, usize, &'static str, MatchedFields)> =
                None;
            for pattern in &self.patterns {
                if let Some(caps) = pattern.regex.captures(&work) {
                    let whole = caps.get(0).expect("group 0 always present");
                    hit = Some((
                        whole.start(),
                        whole.end(),
                        pattern.name,
                        extract_fields(&self.locale, &caps),
                    ));
                    break;
                }
            }
            let Some((start, end, name, fields)) = hit else { break };
            tracing::trace!(
                pattern = name,
                text = &work[start..end],
                "leaf pattern hit"
            );

            if let Some(slot) =
                slots.iter_mut().find(|slot| !slot.conflicts_with(&fields))
            {
                slot.absorb(fields, start);
            } else if slots.len() < 2 {
                let mut slot = PartialDate::default();
                slot.absorb(fields, start);
                slots.push(slot);
            } else {
                overflow.push(work[start..end].to_string());
            }

            // Blank the consumed span, keeping byte positions stable.
            let blank = " ".repeat(end - start);
            work.replace_range(start..end, &blank);
        }

        CascadeResult { slots, residue: work, overflow }
    }

    /// Validate one assembled date and encode it, accumulating
    /// diagnostics. Offending components degrade to missing so the rest
    /// of the date survives as a best-effort value.
    fn finalize(
        &self,
        slot: &PartialDate,
        second: bool,
        diagnostics: &mut Vec<ParseDiagnostic>,
    ) -> SdnDate {
        let mut push = |kind: DiagnosticKind, text: String| {
            let mut diag = ParseDiagnostic::new(kind, text);
            diag.second_date = second;
            diagnostics.push(diag);
        };

        let mut modifiers = DateModifiers::NONE;
        let mut year = slot.year;
        let mut month = slot.month;
        let day = slot.day;

        // Short years: the era word disambiguates ("44 BC" is literal).
        if let Some(y) = year
            && slot.year_digits <= 2
            && slot.era.is_none()
        {
            match self.options.two_digit_year {
                TwoDigitYearPolicy::Warn => {
                    let kind = if slot.year_digits == 1 {
                        DiagnosticKind::AmbiguousOneDigitYear
                    } else {
                        DiagnosticKind::AmbiguousTwoDigitYear
                    };
                    push(kind, y.to_string());
                }
                TwoDigitYearPolicy::CurrentCentury => {
                    year = Some(current_century() + y);
                }
                TwoDigitYearPolicy::PreviousCentury => {
                    year = Some(current_century() - 100 + y);
                }
            }
        }

        if let Some(era) = &slot.era {
            if era.bce {
                year = year.map(|y| -y);
            }
            if self.options.warn_on_era_mismatch
                && era.vocabulary != self.options.era_vocabulary
            {
                push(DiagnosticKind::EraVocabularyMismatch, era.text.clone());
            }
        }

        if let Some(q) = slot.quarter {
            month = Some((q - 1) * 3 + 1);
            modifiers.insert(DateModifiers::QUARTER);
        }

        if let Some(m) = month
            && !(1..=12).contains(&m)
        {
            push(DiagnosticKind::MonthOutOfRange, m.to_string());
            month = None;
        }
        let day = validate_day(day, month, year, &mut push);

        // Double dates.
        if let Some(dual) = slot.dual {
            let resolved = self.resolve_double_date(year, month, day, dual);
            match resolved {
                Some(new_year) => {
                    year = Some(new_year);
                    modifiers.insert(DateModifiers::DOUBLE_DATE);
                }
                None => {
                    let shown = year.map_or_else(
                        || format!("/{dual:02}"),
                        |y| format!("{y}/{dual:02}"),
                    );
                    push(DiagnosticKind::InvalidDoubleDate, shown);
                }
            }
        } else if let (Some(y), Some(m)) = (year, month)
            && y < self.options.double_date_cutover_year
            && in_double_date_window(m, day)
        {
            match self.options.auto_double_dates {
                AutoDoubleDatePolicy::Warn => {
                    push(DiagnosticKind::AmbiguousDoubleDate, y.to_string());
                }
                AutoDoubleDatePolicy::Always => {
                    tracing::warn!(
                        year = y,
                        "treating pre-cutover date as a double date"
                    );
                    year = Some(y + 1);
                    modifiers.insert(DateModifiers::DOUBLE_DATE);
                    push(DiagnosticKind::AutoResolvedDoubleDate, y.to_string());
                }
                AutoDoubleDatePolicy::Never => {}
            }
        }

        if let Some(y) = year
            && gregorian_to_sdn(y, 1, 1) == 0
            && gregorian_to_sdn(y, 12, 31) == 0
        {
            push(DiagnosticKind::YearOutOfRange, y.to_string());
            year = None;
        }

        SdnDate::encode(year, month, day, modifiers)
    }

    /// The resolved (new-style) year of a plausible double date, or
    /// `None` when the notation is invalid.
    fn resolve_double_date(
        &self,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
        dual: u32,
    ) -> Option<i32> {
        let year = year?;
        if year >= self.options.double_date_cutover_year || year < 0 {
            return None;
        }
        let next = year + 1;
        let continues = if dual >= 100 {
            i64::from(dual) == i64::from(next)
        } else {
            i64::from(dual) == i64::from(next.rem_euclid(100))
        };
        if !continues {
            return None;
        }
        match month {
            Some(m) if !in_double_date_window(m, day) => None,
            _ => Some(next),
        }
    }
}

/// Day-of-month validation. An offending day degrades to missing so the
/// rest of the date survives.
fn validate_day(
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    push: &mut impl FnMut(DiagnosticKind, String),
) -> Option<u32> {
    let d = day?;
    if d == 0 || d > 31 {
        push(DiagnosticKind::DayOutOfRange, d.to_string());
        return None;
    }
    let limit = match (year, month) {
        (Some(y), Some(m)) => days_in_month(Calendar::Gregorian, y, m),
        // No year: allow 29 Feb, it may be a leap year.
        (None, Some(m)) => days_in_month(Calendar::Gregorian, 2000, m),
        _ => 31,
    };
    if d <= limit {
        return Some(d);
    }
    if month == Some(2)
        && d == 29
        && year.is_some_and(|y| !is_leap_year(Calendar::Gregorian, y))
    {
        let y = year.unwrap_or_default();
        push(DiagnosticKind::InvalidLeapDay, format!("29 Feb {y}"));
    } else {
        push(DiagnosticKind::DayOutOfRange, d.to_string());
    }
    None
}

/// Double dates only occur while the old-style year was still running:
/// 1 January through 24 March.
fn in_double_date_window(month: u32, day: Option<u32>) -> bool {
    month < 3 || (month == 3 && day.is_none_or(|d| d <= 24))
}

fn today_sdn() -> u32 {
    let today = chrono::Local::now().date_naive();
    gregorian_to_sdn(today.year(), today.month(), today.day())
}

fn current_century() -> i32 {
    let year = chrono::Local::now().date_naive().year();
    year - year.rem_euclid(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> DateParser {
        DateParser::english()
    }

    #[test]
    fn plain_date_parses_without_diagnostics() {
        let outcome = parser().parse("22 Dec 2000").unwrap();
        assert!(outcome.matched);
        assert!(outcome.diagnostics.is_empty());
        let date = outcome.first().unwrap();
        assert_eq!(date.year(), Some(2000));
        assert_eq!(date.month(), Some(12));
        assert_eq!(date.day(), Some(22));
        assert_eq!(date.modifiers(), DateModifiers::NONE);
    }

    #[test]
    fn qualifier_sets_the_about_modifier() {
        let outcome = parser().parse("Abt 1900").unwrap();
        assert_eq!(outcome.modifiers, DateModifiers::ABOUT);
        let date = outcome.first().unwrap();
        assert_eq!(date.year(), Some(1900));
        assert_eq!(date.month(), None);
        assert_eq!(date.day(), None);
        assert!(date.modifiers().contains(DateModifiers::ABOUT));
    }

    #[test]
    fn keyword_short_circuits() {
        let outcome = parser().parse("bic").unwrap();
        assert_eq!(
            outcome.value,
            Some(EncodedDate::Keyword(DateKeyword::Bic))
        );
    }

    #[test]
    fn between_builds_a_range() {
        let outcome = parser().parse("Bet 1850 and 1860").unwrap();
        assert!(outcome.diagnostics.is_empty());
        let begin = outcome.first().unwrap();
        let end = outcome.second().unwrap();
        assert_eq!(begin.year(), Some(1850));
        assert_eq!(end.year(), Some(1860));
        assert_eq!(begin.month(), None);
        assert_eq!(end.day(), None);
    }

    #[test]
    fn year_propagates_to_the_year_less_half() {
        let outcome = parser().parse("bet 1 Jan and 5 Mar 1900").unwrap();
        let begin = outcome.first().unwrap();
        let end = outcome.second().unwrap();
        assert_eq!(begin.year(), Some(1900));
        assert_eq!(begin.month(), Some(1));
        assert_eq!(begin.day(), Some(1));
        assert_eq!(end.month(), Some(3));
    }

    #[test]
    fn inverted_range_is_reordered_and_critical() {
        let err = parser().parse("bet 2005 and 1995").unwrap_err();
        assert_eq!(err.reason, DiagnosticKind::RangeOrderSwapped);
        let begin = err.outcome.first().unwrap();
        let end = err.outcome.second().unwrap();
        assert_eq!(begin.year(), Some(1995));
        assert_eq!(end.year(), Some(2005));
    }

    #[test]
    fn year_less_inverted_range_is_reordered_by_month() {
        let err = parser().parse("bet Mar and Jan").unwrap_err();
        assert_eq!(err.reason, DiagnosticKind::RangeOrderSwapped);
        let begin = err.outcome.first().unwrap();
        let end = err.outcome.second().unwrap();
        assert_eq!(begin.month(), Some(1));
        assert_eq!(end.month(), Some(3));
        assert_eq!(begin.year(), None);
    }

    #[test]
    fn between_without_a_connector_word_warns() {
        let outcome = parser().parse("bet 1850 1860").unwrap();
        assert_eq!(outcome.first().unwrap().year(), Some(1850));
        assert_eq!(outcome.second().unwrap().year(), Some(1860));
        assert_eq!(
            outcome.headline().unwrap().kind,
            DiagnosticKind::MissingRangeConnector
        );
    }

    #[test]
    fn unparseable_text_falls_back_without_raising() {
        let outcome = parser().parse("no date here at all").unwrap();
        assert!(!outcome.matched);
        assert_eq!(
            outcome.value,
            Some(EncodedDate::Text("no date here at all".to_string()))
        );
        assert_eq!(
            outcome.headline().unwrap().kind,
            DiagnosticKind::Unparseable
        );
    }

    #[test]
    fn residual_junk_next_to_a_date_is_critical() {
        let err = parser().parse("22 Dec 2000 gibberish").unwrap_err();
        assert_eq!(err.reason, DiagnosticKind::Unparseable);
        assert_eq!(err.offending_text, "gibberish");
        // The best-effort date is still available.
        assert_eq!(err.outcome.first().unwrap().year(), Some(2000));
    }

    #[test]
    fn valid_double_date_resolves_to_the_new_style_year() {
        let outcome = parser().parse("12 Feb 1699/00").unwrap();
        let date = outcome.first().unwrap();
        assert!(date.modifiers().contains(DateModifiers::DOUBLE_DATE));
        assert_eq!(date.year(), Some(1700));
        assert_eq!(date.month(), Some(2));
        assert_eq!(date.day(), Some(12));
    }

    #[test]
    fn invalid_double_date_clears_the_flag() {
        let err = parser().parse("12 Feb 1699/05").unwrap_err();
        assert_eq!(err.reason, DiagnosticKind::InvalidDoubleDate);
        let date = err.outcome.first().unwrap();
        assert!(!date.modifiers().contains(DateModifiers::DOUBLE_DATE));
        assert_eq!(date.year(), Some(1699));
    }

    #[test]
    fn double_date_outside_the_window_is_invalid() {
        // April is past the 24 March end of the old-style year.
        let err = parser().parse("2 Apr 1699/00").unwrap_err();
        assert_eq!(err.reason, DiagnosticKind::InvalidDoubleDate);
    }

    #[test]
    fn four_digit_continuation_is_accepted() {
        let outcome = parser().parse("Feb 1699/1700").unwrap();
        let date = outcome.first().unwrap();
        assert!(date.modifiers().contains(DateModifiers::DOUBLE_DATE));
        assert_eq!(date.year(), Some(1700));
    }

    #[test]
    fn two_digit_year_warns_by_default() {
        let outcome = parser().parse("12 Feb 99").unwrap();
        assert_eq!(
            outcome.headline().unwrap().kind,
            DiagnosticKind::AmbiguousTwoDigitYear
        );
        assert_eq!(outcome.first().unwrap().year(), Some(99));
    }

    #[test]
    fn two_digit_year_policy_can_pick_a_century() {
        let options = ParserOptions {
            two_digit_year: TwoDigitYearPolicy::PreviousCentury,
            ..ParserOptions::default()
        };
        let parser = DateParser::new(Locale::english(), options);
        let outcome = parser.parse("12 Feb 99").unwrap();
        let expected = current_century() - 100 + 99;
        assert_eq!(outcome.first().unwrap().year(), Some(expected));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn era_year_is_literal_and_negative() {
        let outcome = parser().parse("44 BC").unwrap();
        assert_eq!(outcome.first().unwrap().year(), Some(-44));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn era_vocabulary_mismatch_warns() {
        let outcome = parser().parse("330 BCE").unwrap();
        assert_eq!(outcome.first().unwrap().year(), Some(-330));
        assert_eq!(
            outcome.headline().unwrap().kind,
            DiagnosticKind::EraVocabularyMismatch
        );
    }

    #[test]
    fn quarter_dates_set_the_flag_and_start_month() {
        let outcome = parser().parse("2nd quarter 1900").unwrap();
        let date = outcome.first().unwrap();
        assert!(date.modifiers().contains(DateModifiers::QUARTER));
        assert_eq!(date.month(), Some(4));
        assert_eq!(date.year(), Some(1900));
        assert_eq!(date.day(), None);
    }

    #[test]
    fn leap_day_of_a_non_leap_year_is_critical() {
        let err = parser().parse("29 Feb 1900").unwrap_err();
        assert_eq!(err.reason, DiagnosticKind::InvalidLeapDay);
        // The day degrades to missing; month and year survive.
        let date = err.outcome.first().unwrap();
        assert_eq!(date.year(), Some(1900));
        assert_eq!(date.month(), Some(2));
        assert_eq!(date.day(), None);
    }

    #[test]
    fn leap_day_of_a_leap_year_is_fine() {
        let outcome = parser().parse("29 Feb 2000").unwrap();
        assert_eq!(outcome.first().unwrap().day(), Some(29));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn future_date_warns() {
        let outcome = parser().parse("1 Jan 3000").unwrap();
        assert_eq!(
            outcome.headline().unwrap().kind,
            DiagnosticKind::FutureDate
        );
        assert!(outcome.matched);
    }

    #[test]
    fn two_dates_without_connector_warn() {
        let outcome = parser().parse("Jan 1900 Feb 1901").unwrap();
        assert!(outcome.second().is_some());
        assert_eq!(
            outcome.headline().unwrap().kind,
            DiagnosticKind::MissingRangeConnector
        );
    }

    #[test]
    fn hyphen_range_of_years() {
        let outcome = parser().parse("1995-2005").unwrap();
        assert_eq!(outcome.first().unwrap().year(), Some(1995));
        assert_eq!(outcome.second().unwrap().year(), Some(2005));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn en_dash_range_of_years() {
        let outcome = parser().parse("1850–1860").unwrap();
        assert_eq!(outcome.first().unwrap().year(), Some(1850));
        assert_eq!(outcome.second().unwrap().year(), Some(1860));
    }

    #[test]
    fn empty_input_is_an_empty_outcome() {
        let outcome = parser().parse("   ").unwrap();
        assert!(!outcome.matched);
        assert_eq!(outcome.value, None);
        assert!(outcome.diagnostics.is_empty());
    }
}
