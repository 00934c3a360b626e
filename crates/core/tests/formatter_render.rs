use gendate_core::encoding::{DateModifiers, EncodedDate, SdnDate};
use gendate_core::formatter::{
    DateFormatter, DatePattern, FormatOptions, StandardPattern,
};
use gendate_core::locale::Locale;
use gendate_core::parser::DateParser;
use insta::assert_snapshot;

/// Parse with defaults and render with the default pattern.
fn round_trip(input: &str) -> String {
    let outcome = DateParser::english().parse(input).unwrap();
    outcome.value.unwrap().to_string()
}

#[test]
fn parse_then_render_normalizes_common_phrases() {
    assert_snapshot!(round_trip("22 dec 2000"), @"22 Dec 2000");
    assert_snapshot!(round_trip("december 22, 2000"), @"22 Dec 2000");
    assert_snapshot!(round_trip("2000-12-22"), @"22 Dec 2000");
    assert_snapshot!(round_trip("abt 1900"), @"about 1900");
    assert_snapshot!(round_trip("bef 14 may 1857"), @"Before 14 May 1857");
    assert_snapshot!(round_trip("bet 1850 and 1860"), @"1850–1860");
    assert_snapshot!(round_trip("12 feb 1699/00"), @"12 Feb 1699/00");
    assert_snapshot!(round_trip("44 bc"), @"44 BC");
    assert_snapshot!(round_trip("bic"), @"BIC");
}

#[test]
fn same_month_range_renders_compactly() {
    let value = EncodedDate::Range {
        begin: SdnDate::encode(
            Some(1900),
            Some(3),
            Some(15),
            DateModifiers::NONE,
        ),
        end: SdnDate::encode(Some(1900), Some(3), Some(20), DateModifiers::NONE),
    };
    assert_snapshot!(value.to_string(), @"15–20 Mar 1900");

    let formatter = DateFormatter::english();
    let month_first = DatePattern::standard(StandardPattern::MonthDayYear);
    assert_snapshot!(formatter.format(&value, &month_first), @"Mar 15–20, 1900");
}

#[test]
fn standard_patterns_disagree_only_in_layout() {
    let value = EncodedDate::Sdn(SdnDate::encode(
        Some(1699),
        Some(2),
        Some(3),
        DateModifiers::NONE,
    ));
    let formatter = DateFormatter::english();
    assert_snapshot!(
        formatter.format_standard(&value, StandardPattern::DayMonthYear),
        @"3 Feb 1699"
    );
    assert_snapshot!(
        formatter.format_standard(&value, StandardPattern::MonthDayYear),
        @"Feb 3, 1699"
    );
    assert_snapshot!(
        formatter.format_standard(&value, StandardPattern::YearMonthDay),
        @"1699 Feb 3"
    );
}

#[test]
fn custom_token_strings_render_numeric_layouts() {
    let value = EncodedDate::Sdn(SdnDate::encode(
        Some(1900),
        Some(2),
        Some(3),
        DateModifiers::NONE,
    ));
    let formatter = DateFormatter::english();
    assert_snapshot!(
        formatter.format(&value, &DatePattern::custom("dd.MM.yyyy")),
        @"03.02.1900"
    );
    assert_snapshot!(
        formatter.format(&value, &DatePattern::custom("yyyy-MM-dd")),
        @"1900-02-03"
    );
    assert_snapshot!(
        formatter.format(&value, &DatePattern::custom("d MMMM yyyy")),
        @"3 February 1900"
    );
}

#[test]
fn missing_components_drop_out_of_any_pattern() {
    let formatter = DateFormatter::english();
    let value = EncodedDate::Sdn(SdnDate::encode(
        Some(1900),
        Some(3),
        None,
        DateModifiers::NONE,
    ));
    assert_snapshot!(
        formatter.format(&value, &DatePattern::custom("dd.MM.yyyy")),
        @"02.1900"
    );

    let year_only =
        EncodedDate::Sdn(SdnDate::encode(Some(1900), None, None, DateModifiers::NONE));
    assert_snapshot!(
        formatter.format_standard(&year_only, StandardPattern::MonthDayYear),
        @"1900"
    );

    let nothing =
        EncodedDate::Sdn(SdnDate::encode(None, None, None, DateModifiers::NONE));
    assert_snapshot!(formatter.format_standard(&nothing, StandardPattern::DayMonthYear), @"");
}

#[test]
fn era_words_follow_the_configured_vocabulary() {
    let value =
        EncodedDate::Sdn(SdnDate::encode(Some(-330), None, None, DateModifiers::NONE));
    assert_snapshot!(value.to_string(), @"330 BC");

    let options = FormatOptions {
        era_vocabulary: gendate_core::locale::EraVocabulary::BceCe,
        ..FormatOptions::default()
    };
    let formatter = DateFormatter::new(Locale::english(), options);
    assert_snapshot!(
        formatter.format(&value, &DatePattern::default()),
        @"330 BCE"
    );
}

#[test]
fn fuzziness_word_override_applies_to_about() {
    let inner = SdnDate::encode(Some(1900), None, None, DateModifiers::ABOUT);
    let value = EncodedDate::Sdn(inner);
    let options = FormatOptions {
        fuzziness_word: Some("maybe".to_string()),
        ..FormatOptions::default()
    };
    let formatter = DateFormatter::new(Locale::english(), options);
    assert_snapshot!(formatter.format(&value, &DatePattern::default()), @"maybe 1900");
}
