//! Rendering encoded dates back to text.

use serde::{Deserialize, Serialize};

use super::pattern::{DatePattern, StandardPattern, Token};
use crate::encoding::{DateModifiers, EncodedDate, Proximity, SdnDate};
use crate::locale::{EraVocabulary, Locale};

/// Rendering knobs, independent of the locale vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Which era words to print for old or negative years.
    #[serde(default)]
    pub era_vocabulary: EraVocabulary,
    /// Positive years at or below this get a trailing era word; negative
    /// years always do.
    #[serde(default = "default_era_cutoff")]
    pub era_cutoff_year: i32,
    /// Overrides the locale's word for the About modifier.
    #[serde(default)]
    pub fuzziness_word: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            era_vocabulary: EraVocabulary::default(),
            era_cutoff_year: default_era_cutoff(),
            fuzziness_word: None,
        }
    }
}

fn default_era_cutoff() -> i32 {
    999
}

/// Which components a range endpoint leaves to the other endpoint.
#[derive(Debug, Clone, Copy, Default)]
struct Suppress {
    year: bool,
    month: bool,
}

/// Renders encoded dates to localized text.
pub struct DateFormatter {
    locale: Locale,
    options: FormatOptions,
}

impl DateFormatter {
    #[must_use]
    pub fn new(locale: Locale, options: FormatOptions) -> Self {
        Self { locale, options }
    }

    /// A formatter with the English locale and default options.
    #[must_use]
    pub fn english() -> Self {
        Self::new(Locale::english(), FormatOptions::default())
    }

    /// Render a value with a compiled pattern.
    #[must_use]
    pub fn format(&self, value: &EncodedDate, pattern: &DatePattern) -> String {
        match value {
            EncodedDate::Sdn(date) => {
                self.render_date(*date, pattern, Suppress::default())
            }
            EncodedDate::Keyword(keyword) => keyword.canonical().to_string(),
            EncodedDate::Text(raw) => raw.clone(),
            EncodedDate::Range { begin, end } => {
                self.render_range(*begin, *end, pattern)
            }
        }
    }

    /// Render a value with one of the named standard patterns.
    #[must_use]
    pub fn format_standard(
        &self,
        value: &EncodedDate,
        which: StandardPattern,
    ) -> String {
        self.format(value, &DatePattern::standard(which))
    }

    /// Shared components print once: a same-year range drops the year from
    /// the begin endpoint, and a same-month range additionally drops the
    /// month from whichever endpoint the pattern does not put first.
    fn render_range(
        &self,
        begin: SdnDate,
        end: SdnDate,
        pattern: &DatePattern,
    ) -> String {
        let same_year = begin.year() == end.year();
        let same_month = same_year && begin.month() == end.month();

        let mut begin_suppress = Suppress { year: same_year, month: false };
        let mut end_suppress = Suppress::default();
        if same_month {
            if pattern.day_before_month() {
                begin_suppress.month = true;
            } else {
                end_suppress.month = true;
            }
        }

        let begin_text = self.render_date(begin, pattern, begin_suppress);
        let end_text = self.render_date(end, pattern, end_suppress);
        match (begin_text.is_empty(), end_text.is_empty()) {
            (true, _) => end_text,
            (_, true) => begin_text,
            _ => format!("{begin_text}\u{2013}{end_text}"),
        }
    }

    fn render_date(
        &self,
        date: SdnDate,
        pattern: &DatePattern,
        suppress: Suppress,
    ) -> String {
        let year = if suppress.year { None } else { date.year() };
        let month = if suppress.month { None } else { date.month() };
        let day = date.day();
        if date.year().is_none() && date.month().is_none() && day.is_none() {
            return String::new();
        }

        // Missing fields render empty; a delimiter is only flushed when a
        // non-empty field stands on both sides of it, which collapses the
        // repeats and trims the ends.
        let mut out = String::new();
        let mut pending: Option<&str> = None;
        let mut field = |out: &mut String, pending: &mut Option<&str>, text: String| {
            if text.is_empty() {
                return;
            }
            if !out.is_empty()
                && let Some(delimiter) = pending.take()
            {
                out.push_str(delimiter);
            }
            *pending = None;
            out.push_str(&text);
        };

        for token in &pattern.tokens {
            match token {
                Token::Literal(text) => {
                    pending = pending.or(Some(text.as_str()));
                }
                Token::YearFull => field(
                    &mut out,
                    &mut pending,
                    year.map_or_else(String::new, |y| {
                        self.render_year(y, date.modifiers())
                    }),
                ),
                Token::MonthFull | Token::MonthAbbrev => {
                    let abbreviated = matches!(token, Token::MonthAbbrev);
                    let text = month
                        .and_then(|m| self.locale.month_name(m, abbreviated))
                        .map_or_else(String::new, capitalize);
                    field(&mut out, &mut pending, text);
                }
                Token::MonthPadded => field(
                    &mut out,
                    &mut pending,
                    month.map_or_else(String::new, |m| format!("{m:02}")),
                ),
                Token::MonthNumeric => field(
                    &mut out,
                    &mut pending,
                    month.map_or_else(String::new, |m| m.to_string()),
                ),
                Token::DayPadded => field(
                    &mut out,
                    &mut pending,
                    day.map_or_else(String::new, |d| format!("{d:02}")),
                ),
                Token::DayNumeric => field(
                    &mut out,
                    &mut pending,
                    day.map_or_else(String::new, |d| d.to_string()),
                ),
                Token::Modifier => field(
                    &mut out,
                    &mut pending,
                    self.modifier_word(date.modifiers()),
                ),
            }
        }
        out
    }

    /// The year digits, with the old-style/new-style suffix for double
    /// dates and a trailing era word for old or negative years.
    fn render_year(&self, year: i32, modifiers: DateModifiers) -> String {
        let mut text = if modifiers.contains(DateModifiers::DOUBLE_DATE) {
            format!("{}/{:02}", year - 1, year.rem_euclid(100))
        } else {
            year.abs().to_string()
        };
        if year < 0 || year <= self.options.era_cutoff_year {
            text.push(' ');
            text.push_str(
                self.locale.era_word(self.options.era_vocabulary, year < 0),
            );
        }
        text
    }

    fn modifier_word(&self, modifiers: DateModifiers) -> String {
        let words = &self.locale.modifier_words;
        match modifiers.proximity() {
            Proximity::Before => words.before.clone(),
            Proximity::After => words.after.clone(),
            Proximity::About => self
                .options
                .fuzziness_word
                .clone()
                .unwrap_or_else(|| words.about.clone()),
            Proximity::Exact => {
                if modifiers.contains(DateModifiers::CALCULATED) {
                    words.calculated.clone()
                } else {
                    String::new()
                }
            }
        }
    }
}

impl std::fmt::Display for EncodedDate {
    /// English day-month-year rendering; build a [`DateFormatter`] for
    /// anything locale- or pattern-specific.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatter = DateFormatter::english();
        f.write_str(&formatter.format_standard(self, StandardPattern::default()))
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
