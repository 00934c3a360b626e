//! The encoded date value model.
//!
//! An [`EncodedDate`] is an immutable value: a concrete (possibly partial)
//! date on the serial-day axis, a symbolic keyword, a raw-text fallback, or
//! a range. Concrete dates and keywords have a packed 32-bit interop form;
//! the packed form is a serialization encoding only, never the in-memory
//! representation.
//!
//! Packed layout: bit 31 clear means an SDN date, `(sdn << 9) | modifiers`
//! with the SDN in bits 9-30 and the modifier flags in bits 0-8. Bit 31 set
//! means a keyword, with the keyword ordinal in the remaining bits.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::keyword::DateKeyword;
use super::modifiers::{DateModifiers, Proximity};
use crate::calendar::{Calendar, MAX_SDN};

/// Number of low bits reserved for modifier flags in the packed form.
pub const MODIFIER_BITS: u32 = 9;

/// Top-bit tag marking a packed keyword value.
pub const KEYWORD_TAG: u32 = 0x8000_0000;

/// Year substituted when the year is missing, the first full year on the
/// day axis; every month and day of it has a valid SDN.
pub const EPOCH_ANCHOR_YEAR: i32 = -4713;

/// Distant year a year-missing date is pinned to when building its sort
/// key, so it sorts after every dated value while its modifiers still
/// order it against other year-missing values.
pub const SORT_SENTINEL_YEAR: i32 = 9999;

/// A concrete date on the serial-day axis with modifier flags.
///
/// Partial precision is represented by the per-component missing flags:
/// the component is still encoded (with a default) so the SDN stays
/// comparable, but the accessors report it as absent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SdnDate {
    sdn: u32,
    modifiers: DateModifiers,
}

impl SdnDate {
    /// Encode a (possibly partial) Gregorian date.
    ///
    /// A missing year defaults to [`EPOCH_ANCHOR_YEAR`] and sets
    /// `YEAR_MISSING`; a missing month or day defaults to 1 and sets its
    /// own missing flag. A triple the calendar rejects leaves the SDN at
    /// the sentinel `0`.
    #[must_use]
    pub fn encode(
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
        modifiers: DateModifiers,
    ) -> Self {
        Self::encode_in(Calendar::Gregorian, year, month, day, modifiers)
    }

    /// [`SdnDate::encode`] under an explicit calendar.
    #[must_use]
    pub fn encode_in(
        calendar: Calendar,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
        modifiers: DateModifiers,
    ) -> Self {
        let mut modifiers = modifiers;
        let year = match year {
            Some(y) => y,
            None => {
                modifiers.insert(DateModifiers::YEAR_MISSING);
                EPOCH_ANCHOR_YEAR
            }
        };
        let month = match month {
            Some(m) => m,
            None => {
                modifiers.insert(DateModifiers::MONTH_MISSING);
                1
            }
        };
        let day = match day {
            Some(d) => d,
            None => {
                modifiers.insert(DateModifiers::DAY_MISSING);
                1
            }
        };
        Self { sdn: calendar.to_sdn(year, month, day), modifiers }
    }

    /// Build directly from an SDN and modifier flags.
    #[must_use]
    pub fn from_parts(sdn: u32, modifiers: DateModifiers) -> Self {
        Self { sdn: sdn.min(MAX_SDN), modifiers }
    }

    /// Rebuild from the packed form (top bit must be clear).
    #[must_use]
    pub fn from_packed(code: u32) -> Self {
        Self {
            sdn: (code & !KEYWORD_TAG) >> MODIFIER_BITS,
            modifiers: DateModifiers::from_bits(code),
        }
    }

    /// The packed 32-bit interop form.
    #[must_use]
    pub const fn packed(self) -> u32 {
        (self.sdn << MODIFIER_BITS) | self.modifiers.bits()
    }

    #[must_use]
    pub const fn sdn(self) -> u32 {
        self.sdn
    }

    #[must_use]
    pub const fn modifiers(self) -> DateModifiers {
        self.modifiers
    }

    /// Replace the modifier flags, keeping the day number.
    #[must_use]
    pub const fn with_modifiers(self, modifiers: DateModifiers) -> Self {
        Self { sdn: self.sdn, modifiers }
    }

    /// The year, unless flagged missing or the SDN is the invalid sentinel.
    #[must_use]
    pub fn year(self) -> Option<i32> {
        self.year_in(Calendar::Gregorian)
    }

    /// The month (1-12), unless flagged missing.
    #[must_use]
    pub fn month(self) -> Option<u32> {
        self.month_in(Calendar::Gregorian)
    }

    /// The day of month, unless flagged missing.
    #[must_use]
    pub fn day(self) -> Option<u32> {
        self.day_in(Calendar::Gregorian)
    }

    #[must_use]
    pub fn year_in(self, calendar: Calendar) -> Option<i32> {
        if self.sdn == 0 || self.modifiers.contains(DateModifiers::YEAR_MISSING) {
            return None;
        }
        Some(calendar.from_sdn(self.sdn).0)
    }

    #[must_use]
    pub fn month_in(self, calendar: Calendar) -> Option<u32> {
        if self.sdn == 0 || self.modifiers.contains(DateModifiers::MONTH_MISSING) {
            return None;
        }
        Some(calendar.from_sdn(self.sdn).1)
    }

    #[must_use]
    pub fn day_in(self, calendar: Calendar) -> Option<u32> {
        if self.sdn == 0 || self.modifiers.contains(DateModifiers::DAY_MISSING) {
            return None;
        }
        Some(calendar.from_sdn(self.sdn).2)
    }

    /// Day number used for ordering. A year-missing date is pinned to
    /// [`SORT_SENTINEL_YEAR`] so its month and day still order it.
    #[must_use]
    pub fn sort_key(self) -> u32 {
        if self.sdn != 0 && self.modifiers.contains(DateModifiers::YEAR_MISSING) {
            let (_, month, day) = Calendar::Gregorian.from_sdn(self.sdn);
            crate::calendar::gregorian_to_sdn(SORT_SENTINEL_YEAR, month, day)
        } else {
            self.sdn
        }
    }
}

impl std::fmt::Debug for SdnDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdnDate")
            .field("sdn", &self.sdn)
            .field("year", &self.year())
            .field("month", &self.month())
            .field("day", &self.day())
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

/// Tie-break between equal sort keys by proximity modifier.
///
/// This table is product behavior inherited from decades of data entry;
/// preserve it exactly (see the regression tests) even where the `After`
/// rows disagree with naive chronological intuition. `About` and equal
/// proximities fall through to the packed-bit comparison.
fn proximity_tie_break(a: Proximity, b: Proximity) -> Ordering {
    match (a, b) {
        (Proximity::Exact, Proximity::After)
        | (Proximity::Before, Proximity::Exact | Proximity::After) => {
            Ordering::Less
        }
        (Proximity::Exact, Proximity::Before)
        | (Proximity::After, Proximity::Exact | Proximity::Before) => {
            Ordering::Greater
        }
        _ => Ordering::Equal,
    }
}

impl Ord for SdnDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| {
                proximity_tie_break(
                    self.modifiers.proximity(),
                    other.modifiers.proximity(),
                )
            })
            .then_with(|| self.packed().cmp(&other.packed()))
    }
}

impl PartialOrd for SdnDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A genealogical date value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EncodedDate {
    /// A concrete (possibly partial) date.
    Sdn(SdnDate),
    /// A symbolic, non-chronological status keyword.
    Keyword(DateKeyword),
    /// Unparseable input kept verbatim; sorts after everything else.
    Text(String),
    /// An interval with independently flagged endpoints.
    Range { begin: SdnDate, end: SdnDate },
}

impl EncodedDate {
    /// Decode one packed value, dispatching on the top bit.
    ///
    /// Returns `None` for a keyword ordinal we do not know.
    #[must_use]
    pub fn from_packed(code: u32) -> Option<Self> {
        if code & KEYWORD_TAG != 0 {
            DateKeyword::from_ordinal(code & !KEYWORD_TAG).map(EncodedDate::Keyword)
        } else {
            Some(EncodedDate::Sdn(SdnDate::from_packed(code)))
        }
    }

    /// Decode a packed pair into a range. Both codes must be SDN values.
    #[must_use]
    pub fn from_packed_pair(begin: u32, end: u32) -> Option<Self> {
        if begin & KEYWORD_TAG != 0 || end & KEYWORD_TAG != 0 {
            return None;
        }
        Some(EncodedDate::Range {
            begin: SdnDate::from_packed(begin),
            end: SdnDate::from_packed(end),
        })
    }

    /// The packed form, for values that have one.
    #[must_use]
    pub fn as_packed(&self) -> Option<u32> {
        match self {
            EncodedDate::Sdn(date) => Some(date.packed()),
            EncodedDate::Keyword(keyword) => Some(KEYWORD_TAG | keyword.ordinal()),
            EncodedDate::Text(_) | EncodedDate::Range { .. } => None,
        }
    }

    /// The packed pair of a range.
    #[must_use]
    pub fn packed_pair(&self) -> Option<(u32, u32)> {
        match self {
            EncodedDate::Range { begin, end } => Some((begin.packed(), end.packed())),
            _ => None,
        }
    }

    /// The concrete date anchoring this value on the day axis: the date
    /// itself, or the beginning of a range.
    #[must_use]
    pub fn anchor(&self) -> Option<SdnDate> {
        match self {
            EncodedDate::Sdn(date) => Some(*date),
            EncodedDate::Range { begin, .. } => Some(*begin),
            EncodedDate::Keyword(_) | EncodedDate::Text(_) => None,
        }
    }

    /// Sort key of the anchoring date, exposed so hosts can sort events
    /// without knowing the packed layout. Keywords and text have no
    /// chronological key.
    #[must_use]
    pub fn sort_key(&self) -> Option<u32> {
        self.anchor().map(SdnDate::sort_key)
    }

    #[must_use]
    pub fn modifiers(&self) -> DateModifiers {
        self.anchor().map_or(DateModifiers::NONE, SdnDate::modifiers)
    }

    /// Convenience accessors for the anchoring date's components.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.anchor().and_then(SdnDate::year)
    }

    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.anchor().and_then(SdnDate::month)
    }

    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.anchor().and_then(SdnDate::day)
    }

    fn variant_rank(&self) -> u8 {
        match self {
            EncodedDate::Sdn(_) | EncodedDate::Range { .. } => 0,
            EncodedDate::Keyword(_) => 1,
            EncodedDate::Text(_) => 2,
        }
    }
}

impl Hash for EncodedDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            EncodedDate::Sdn(_) | EncodedDate::Keyword(_) => {
                self.as_packed().hash(state);
            }
            EncodedDate::Text(raw) => raw.hash(state),
            EncodedDate::Range { begin, end } => {
                begin.packed().hash(state);
                end.packed().hash(state);
            }
        }
    }
}

impl Ord for EncodedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.variant_rank()
            .cmp(&other.variant_rank())
            .then_with(|| match (self, other) {
                (EncodedDate::Text(a), EncodedDate::Text(b)) => a.cmp(b),
                (EncodedDate::Keyword(a), EncodedDate::Keyword(b)) => a.cmp(b),
                _ => {
                    let anchors = (self.anchor(), other.anchor());
                    if let (Some(a), Some(b)) = anchors {
                        a.cmp(&b).then_with(|| match (self, other) {
                            (
                                EncodedDate::Range { end: ea, .. },
                                EncodedDate::Range { end: eb, .. },
                            ) => ea.cmp(eb),
                            // A single date sorts before a range it begins.
                            (EncodedDate::Sdn(_), EncodedDate::Range { .. }) => {
                                Ordering::Less
                            }
                            (EncodedDate::Range { .. }, EncodedDate::Sdn(_)) => {
                                Ordering::Greater
                            }
                            _ => Ordering::Equal,
                        })
                    } else {
                        Ordering::Equal
                    }
                }
            })
    }
}

impl PartialOrd for EncodedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout_round_trips() {
        let date = SdnDate::encode(
            Some(1900),
            Some(3),
            Some(15),
            DateModifiers::CALCULATED,
        );
        let packed = date.packed();
        assert_eq!(packed & KEYWORD_TAG, 0);
        assert_eq!(packed & DateModifiers::MASK, DateModifiers::CALCULATED.bits());
        assert_eq!(SdnDate::from_packed(packed), date);
    }

    #[test]
    fn encode_defaults_missing_components() {
        let date = SdnDate::encode(None, Some(3), None, DateModifiers::NONE);
        assert!(date.modifiers().contains(DateModifiers::YEAR_MISSING));
        assert!(date.modifiers().contains(DateModifiers::DAY_MISSING));
        assert!(!date.modifiers().contains(DateModifiers::MONTH_MISSING));
        assert_eq!(date.year(), None);
        assert_eq!(date.month(), Some(3));
        assert_eq!(date.day(), None);
    }

    #[test]
    fn accessors_follow_missing_flags() {
        let date =
            SdnDate::encode(Some(2000), Some(12), Some(22), DateModifiers::NONE);
        assert_eq!(date.year(), Some(2000));
        assert_eq!(date.month(), Some(12));
        assert_eq!(date.day(), Some(22));
    }

    #[test]
    fn julian_accessors_share_the_sdn() {
        let date =
            SdnDate::encode(Some(1700), Some(3), Some(11), DateModifiers::NONE);
        // 11 Mar 1700 Gregorian was 29 Feb 1700 Julian.
        assert_eq!(date.year_in(Calendar::Julian), Some(1700));
        assert_eq!(date.month_in(Calendar::Julian), Some(2));
        assert_eq!(date.day_in(Calendar::Julian), Some(29));
    }

    #[test]
    fn equality_is_bitwise_over_the_packed_form() {
        let plain =
            SdnDate::encode(Some(1900), Some(1), Some(1), DateModifiers::NONE);
        let flagged =
            SdnDate::encode(Some(1900), Some(1), Some(1), DateModifiers::BEFORE);
        assert_ne!(plain, flagged);
        assert_eq!(plain, SdnDate::from_packed(plain.packed()));
    }

    #[test]
    fn keyword_packing_uses_the_top_bit() {
        let value = EncodedDate::Keyword(DateKeyword::Stillborn);
        let packed = value.as_packed().unwrap();
        assert_ne!(packed & KEYWORD_TAG, 0);
        assert_eq!(EncodedDate::from_packed(packed), Some(value));
    }

    #[test]
    fn unknown_keyword_ordinal_decodes_to_none() {
        assert_eq!(EncodedDate::from_packed(KEYWORD_TAG | 999), None);
    }

    #[test]
    fn packed_pair_builds_a_range() {
        let begin =
            SdnDate::encode(Some(1850), None, None, DateModifiers::NONE);
        let end = SdnDate::encode(Some(1860), None, None, DateModifiers::NONE);
        let range =
            EncodedDate::from_packed_pair(begin.packed(), end.packed()).unwrap();
        assert_eq!(range, EncodedDate::Range { begin, end });
        assert_eq!(range.packed_pair(), Some((begin.packed(), end.packed())));
        assert_eq!(
            EncodedDate::from_packed_pair(begin.packed(), KEYWORD_TAG),
            None
        );
    }

    #[test]
    fn before_sorts_earlier_than_after_on_equal_dates() {
        let before =
            SdnDate::encode(Some(1900), Some(6), Some(1), DateModifiers::BEFORE);
        let after =
            SdnDate::encode(Some(1900), Some(6), Some(1), DateModifiers::AFTER);
        assert!(before < after);
    }

    #[test]
    fn proximity_tie_break_table_is_preserved_exactly() {
        use Proximity::{After, Before, Exact};
        // (None,Before) -> later first; (None,After) -> earlier first;
        // (Before,None) -> earlier first; (Before,After) -> earlier first;
        // (After,None) -> later first; (After,Before) -> later first.
        assert_eq!(proximity_tie_break(Exact, Before), Ordering::Greater);
        assert_eq!(proximity_tie_break(Exact, After), Ordering::Less);
        assert_eq!(proximity_tie_break(Before, Exact), Ordering::Less);
        assert_eq!(proximity_tie_break(Before, After), Ordering::Less);
        assert_eq!(proximity_tie_break(After, Exact), Ordering::Greater);
        assert_eq!(proximity_tie_break(After, Before), Ordering::Greater);
    }

    #[test]
    fn about_ties_fall_through_to_packed_bits() {
        let about =
            SdnDate::encode(Some(1900), Some(6), Some(1), DateModifiers::ABOUT);
        let plain =
            SdnDate::encode(Some(1900), Some(6), Some(1), DateModifiers::NONE);
        // No proximity rule for About; the packed comparison decides.
        assert_eq!(
            about.cmp(&plain),
            about.packed().cmp(&plain.packed())
        );
    }

    #[test]
    fn year_missing_dates_sort_after_dated_values() {
        let dated =
            SdnDate::encode(Some(2020), Some(6), Some(1), DateModifiers::NONE);
        let undated = SdnDate::encode(None, Some(6), Some(1), DateModifiers::NONE);
        assert!(dated < undated);
        // Month/day still order two year-missing values.
        let march = SdnDate::encode(None, Some(3), Some(1), DateModifiers::NONE);
        assert!(march < undated);
    }

    #[test]
    fn text_sorts_after_every_chronological_value() {
        let date = EncodedDate::Sdn(SdnDate::encode(
            Some(9000),
            Some(12),
            Some(31),
            DateModifiers::NONE,
        ));
        let keyword = EncodedDate::Keyword(DateKeyword::Unknown);
        let text = EncodedDate::Text("no date".to_string());
        assert!(date < keyword);
        assert!(keyword < text);
        assert!(date < text);
    }
}
