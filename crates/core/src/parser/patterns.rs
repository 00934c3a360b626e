//! The cascading leaf-pattern table.
//!
//! Each leaf pattern is a `(name, regex)` descriptor whose regex uses named
//! capture groups for the date fields it can supply: `d` (day), `mname`
//! (month by name), `mnum` (month by number), `yyyy` (3-4 digit year), `yy`
//! (1-2 digit year), `dual` (the `/NN` double-date suffix), `era`, and `q`
//! (quarter). One generic extractor reads whichever groups matched, so
//! editing a pattern can never silently misalign a field.
//!
//! Order matters: most specific first. The parser tries the table from the
//! top against the remaining text and consumes the first match, repeatedly,
//! so a later pattern only ever sees text no earlier pattern wanted.

use regex::{Captures, Regex};

use crate::locale::{EraVocabulary, Locale};

/// One entry of the cascade.
pub(crate) struct LeafPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// An era word found next to a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EraMatch {
    pub bce: bool,
    /// Which vocabulary the spelling belongs to.
    pub vocabulary: EraVocabulary,
    pub text: String,
}

/// The date fields one leaf match contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MatchedFields {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Number of digits the year was written with (0 when absent).
    pub year_digits: u8,
    pub dual: Option<u32>,
    pub era: Option<EraMatch>,
    pub quarter: Option<u32>,
}

/// Compile the cascade for a locale. `day_first` controls which side of an
/// ambiguous numeric date is the day.
pub(crate) fn build_patterns(locale: &Locale, day_first: bool) -> Vec<LeafPattern> {
    let month = format!(r"(?P<mname>{})", locale.month_alternation());
    let day = r"(?P<d>\d{1,2})(?:st|nd|rd|th)?";
    let of = r"(?:of\s+)?";
    let y4 = r"(?P<yyyy>\d{3,4})";
    let y2 = r"(?P<yy>\d{1,2})";
    // 1-2 digits for the "1699/00" style, 4 for the "1699/1700" style.
    let dual = r"(?P<dual>\d{1,4})";
    // Dotted spellings cannot take a trailing \b (they end in '.'), the
    // plain ones must so "1900 adrift" does not shed an era.
    let era = r"(?P<era>b\.c\.e\.|b\.c\.|c\.e\.|a\.d\.|(?:bce|bc|ce|ad)\b)";
    let era_lead = r"(?P<era>b\.c\.e\.|b\.c\.|c\.e\.|a\.d\.|bce|bc|ce|ad)";
    let sep = r"[./-]";
    let quarter = format!(r"(?:{}|qtr\.?)", regex::escape(&locale.quarter_word));

    let (n1, n2) = if day_first { ("d", "mnum") } else { ("mnum", "d") };
    let numeric =
        |tail: &str| format!(r"\b(?P<{n1}>\d{{1,2}}){sep}(?P<{n2}>\d{{1,2}}){sep}{tail}");

    let table: Vec<(&'static str, String)> = vec![
        (
            "day-month-dual-era",
            format!(r"\b{day}\s+{of}{month}\.?,?\s+{y4}/{dual}\s*{era}"),
        ),
        ("day-month-dual", format!(r"\b{day}\s+{of}{month}\.?,?\s+{y4}/{dual}\b")),
        ("month-day-dual", format!(r"\b{month}\.?\s+{day}\s*,?\s+{y4}/{dual}\b")),
        (
            "day-month-year-era",
            format!(r"\b{day}\s+{of}{month}\.?,?\s+{y4}\s*{era}"),
        ),
        ("day-month-year", format!(r"\b{day}\s+{of}{month}\.?,?\s+{y4}\b")),
        (
            "month-day-year-era",
            format!(r"\b{month}\.?\s+{day}\s*,?\s+{y4}\s*{era}"),
        ),
        ("month-day-year", format!(r"\b{month}\.?\s+{day}\s*,?\s+{y4}\b")),
        ("year-month-day", format!(r"\b{y4}\s+{month}\.?\s+{day}\b")),
        ("day-month-shortyear", format!(r"\b{day}\s+{of}{month}\.?,?\s+{y2}\b")),
        ("month-day-shortyear", format!(r"\b{month}\.?\s+{day}\s*,?\s+{y2}\b")),
        ("month-dual", format!(r"\b{month}\.?,?\s+{y4}/{dual}\b")),
        ("month-year-era", format!(r"\b{month}\.?,?\s+{y4}\s*{era}")),
        ("month-year", format!(r"\b{month}\.?,?\s+{y4}\b")),
        ("year-month", format!(r"\b{y4}\s+{month}\b")),
        ("day-month", format!(r"\b{day}\s+{of}{month}\b")),
        ("month-day", format!(r"\b{month}\.?\s+{day}\b")),
        (
            "iso-year-month-day",
            format!(r"\b(?P<yyyy>\d{{4}}){sep}(?P<mnum>\d{{1,2}}){sep}(?P<d>\d{{1,2}})\b"),
        ),
        ("numeric-dual", numeric(&format!(r"{y4}/{dual}\b"))),
        ("numeric-full", numeric(&format!(r"{y4}\b"))),
        ("numeric-shortyear", numeric(&format!(r"{y2}\b"))),
        ("numeric-month-year", format!(r"\b(?P<mnum>\d{{1,2}})/{y4}\b")),
        (
            "quarter-year",
            format!(r"\b(?P<q>[1-4])(?:st|nd|rd|th)?\s+{quarter}\s*,?\s+{y4}\b"),
        ),
        (
            "year-quarter-word",
            format!(r"\b{y4}\s*,?\s+(?P<q>[1-4])(?:st|nd|rd|th)?\s+{quarter}"),
        ),
        ("year-quarter", format!(r"\b{y4}\s*q(?P<q>[1-4])\b")),
        ("quarter-abbrev-year", format!(r"\bq(?P<q>[1-4])\s+{y4}\b")),
        ("dual-era", format!(r"\b{y4}/{dual}\s*{era}")),
        ("dual", format!(r"\b{y4}/{dual}\b")),
        ("year-era", format!(r"\b{y4}\s*{era}")),
        ("shortyear-era", format!(r"\b{y2}\s*{era}")),
        ("era-year", format!(r"\b{era_lead}\s*(?P<yyyy>\d{{1,4}})\b")),
        ("year", format!(r"\b{y4}\b")),
        ("month-only", format!(r"\b{month}\b")),
        ("short-year", format!(r"\b{y2}\b")),
    ];

    table
        .into_iter()
        .map(|(name, pattern)| LeafPattern {
            name,
            regex: Regex::new(&format!("(?i){pattern}"))
                .expect("valid date pattern"),
        })
        .collect()
}

/// Read the named groups of a match into fields.
pub(crate) fn extract_fields(locale: &Locale, caps: &Captures<'_>) -> MatchedFields {
    let mut fields = MatchedFields::default();

    if let Some(group) = caps.name("d") {
        fields.day = group.as_str().parse().ok();
    }
    if let Some(group) = caps.name("mname") {
        fields.month = locale.month_from_name(group.as_str());
    } else if let Some(group) = caps.name("mnum") {
        fields.month = group.as_str().parse().ok();
    }
    if let Some(group) = caps.name("yyyy") {
        fields.year = group.as_str().parse().ok();
        fields.year_digits = u8::try_from(group.as_str().len()).unwrap_or(u8::MAX);
    } else if let Some(group) = caps.name("yy") {
        fields.year = group.as_str().parse().ok();
        fields.year_digits = u8::try_from(group.as_str().len()).unwrap_or(u8::MAX);
    }
    if let Some(group) = caps.name("dual") {
        fields.dual = group.as_str().parse().ok();
    }
    if let Some(group) = caps.name("era") {
        fields.era = Some(classify_era(group.as_str()));
    }
    if let Some(group) = caps.name("q") {
        fields.quarter = group.as_str().parse().ok();
    }

    fields
}

fn classify_era(text: &str) -> EraMatch {
    let bare: String =
        text.to_lowercase().chars().filter(|c| *c != '.').collect();
    let bce = bare.starts_with('b');
    let vocabulary = match bare.as_str() {
        "bce" | "ce" => EraVocabulary::BceCe,
        _ => EraVocabulary::BcAd,
    };
    EraMatch { bce, vocabulary, text: text.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_for(input: &str) -> (String, MatchedFields) {
        let locale = Locale::english();
        let patterns = build_patterns(&locale, true);
        for pattern in &patterns {
            if let Some(caps) = pattern.regex.captures(input) {
                return (
                    pattern.name.to_string(),
                    extract_fields(&locale, &caps),
                );
            }
        }
        panic!("no pattern matched {input:?}");
    }

    #[test]
    fn day_month_year_is_most_specific_for_full_dates() {
        let (name, fields) = fields_for("22 Dec 2000");
        assert_eq!(name, "day-month-year");
        assert_eq!(fields.day, Some(22));
        assert_eq!(fields.month, Some(12));
        assert_eq!(fields.year, Some(2000));
        assert_eq!(fields.year_digits, 4);
    }

    #[test]
    fn dual_year_binds_before_plain_year() {
        let (name, fields) = fields_for("12 Feb 1699/00");
        assert_eq!(name, "day-month-dual");
        assert_eq!(fields.year, Some(1699));
        assert_eq!(fields.dual, Some(0));
    }

    #[test]
    fn month_day_comma_year() {
        let (name, fields) = fields_for("Feb 12, 1699");
        assert_eq!(name, "month-day-year");
        assert_eq!(fields.day, Some(12));
        assert_eq!(fields.month, Some(2));
        assert_eq!(fields.year, Some(1699));
    }

    #[test]
    fn ordinal_days_and_of_are_accepted() {
        let (name, fields) = fields_for("12th of February 1900");
        assert_eq!(name, "day-month-year");
        assert_eq!(fields.day, Some(12));
        assert_eq!(fields.month, Some(2));
    }

    #[test]
    fn era_words_bind_with_the_year() {
        let (name, fields) = fields_for("44 BC");
        assert_eq!(name, "shortyear-era");
        let era = fields.era.unwrap();
        assert!(era.bce);
        assert_eq!(era.vocabulary, EraVocabulary::BcAd);

        let (_, fields) = fields_for("330 bce");
        let era = fields.era.unwrap();
        assert!(era.bce);
        assert_eq!(era.vocabulary, EraVocabulary::BceCe);

        let (_, fields) = fields_for("1900 a.d.");
        assert!(!fields.era.unwrap().bce);
    }

    #[test]
    fn numeric_dates_respect_day_order() {
        let locale = Locale::english();
        let day_first = build_patterns(&locale, true);
        let month_first = build_patterns(&locale, false);
        let input = "12/02/1900";

        let hit = day_first
            .iter()
            .find_map(|p| p.regex.captures(input))
            .unwrap();
        let fields = extract_fields(&locale, &hit);
        assert_eq!((fields.day, fields.month), (Some(12), Some(2)));

        let hit = month_first
            .iter()
            .find_map(|p| p.regex.captures(input))
            .unwrap();
        let fields = extract_fields(&locale, &hit);
        assert_eq!((fields.day, fields.month), (Some(2), Some(12)));
    }

    #[test]
    fn iso_dates_put_the_year_first() {
        let (name, fields) = fields_for("1900-02-12");
        assert_eq!(name, "iso-year-month-day");
        assert_eq!(fields.year, Some(1900));
        assert_eq!(fields.month, Some(2));
        assert_eq!(fields.day, Some(12));
    }

    #[test]
    fn quarters_are_recognized_in_both_spellings() {
        let (name, fields) = fields_for("2nd quarter 1900");
        assert_eq!(name, "quarter-year");
        assert_eq!(fields.quarter, Some(2));
        assert_eq!(fields.year, Some(1900));

        let (name, fields) = fields_for("1900 Q3");
        assert_eq!(name, "year-quarter");
        assert_eq!(fields.quarter, Some(3));
    }

    #[test]
    fn bare_years_fall_through_to_the_year_patterns() {
        let (name, fields) = fields_for("1850");
        assert_eq!(name, "year");
        assert_eq!(fields.year, Some(1850));
        assert_eq!(fields.year_digits, 4);

        let (name, fields) = fields_for("99");
        assert_eq!(name, "short-year");
        assert_eq!(fields.year_digits, 2);
    }

    #[test]
    fn month_only_matches_a_lone_month_name() {
        let (name, fields) = fields_for("March");
        assert_eq!(name, "month-only");
        assert_eq!(fields.month, Some(3));
        assert_eq!(fields.year, None);
    }
}
