//! Symbolic keyword dates.
//!
//! Certain genealogical record fields carry a non-chronological status word
//! instead of a calendar date: ordinance states like "Cleared" or
//! "Submitted", life-event shorthands like "Stillborn" or "Infant", and
//! privacy markers. These are encoded as a keyword ordinal in the packed
//! form, tagged by the top bit.

use serde::Serialize;

/// The symbolic keyword states accepted in place of a calendar date.
///
/// The declaration order fixes each keyword's packed ordinal; do not
/// reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DateKeyword {
    Bic,
    Cancelled,
    Child,
    Cleared,
    Completed,
    Dead,
    Deceased,
    Dns,
    DnsCan,
    Done,
    Infant,
    NeverMarried,
    NotMarried,
    Pre1970,
    Private,
    Stillborn,
    Submitted,
    Uncleared,
    Unknown,
    Young,
}

impl DateKeyword {
    /// Every keyword, in ordinal order.
    pub const ALL: [DateKeyword; 20] = [
        DateKeyword::Bic,
        DateKeyword::Cancelled,
        DateKeyword::Child,
        DateKeyword::Cleared,
        DateKeyword::Completed,
        DateKeyword::Dead,
        DateKeyword::Deceased,
        DateKeyword::Dns,
        DateKeyword::DnsCan,
        DateKeyword::Done,
        DateKeyword::Infant,
        DateKeyword::NeverMarried,
        DateKeyword::NotMarried,
        DateKeyword::Pre1970,
        DateKeyword::Private,
        DateKeyword::Stillborn,
        DateKeyword::Submitted,
        DateKeyword::Uncleared,
        DateKeyword::Unknown,
        DateKeyword::Young,
    ];

    /// Packed ordinal of this keyword.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Keyword for a packed ordinal, if it is one we know.
    #[must_use]
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// The canonical display spelling.
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            DateKeyword::Bic => "BIC",
            DateKeyword::Cancelled => "Cancelled",
            DateKeyword::Child => "Child",
            DateKeyword::Cleared => "Cleared",
            DateKeyword::Completed => "Completed",
            DateKeyword::Dead => "Dead",
            DateKeyword::Deceased => "Deceased",
            DateKeyword::Dns => "DNS",
            DateKeyword::DnsCan => "DNS/CAN",
            DateKeyword::Done => "Done",
            DateKeyword::Infant => "Infant",
            DateKeyword::NeverMarried => "Never Married",
            DateKeyword::NotMarried => "Not Married",
            DateKeyword::Pre1970 => "Pre-1970",
            DateKeyword::Private => "Private",
            DateKeyword::Stillborn => "Stillborn",
            DateKeyword::Submitted => "Submitted",
            DateKeyword::Uncleared => "Uncleared",
            DateKeyword::Unknown => "Unknown",
            DateKeyword::Young => "Young",
        }
    }

    /// Accepted lowercase spellings, canonical form first.
    #[must_use]
    pub const fn spellings(self) -> &'static [&'static str] {
        match self {
            DateKeyword::Bic => &["bic"],
            DateKeyword::Cancelled => &["cancelled", "canceled", "can"],
            DateKeyword::Child => &["child", "chi"],
            DateKeyword::Cleared => &["cleared", "cle"],
            DateKeyword::Completed => &["completed", "com"],
            DateKeyword::Dead => &["dead"],
            DateKeyword::Deceased => &["deceased", "dec"],
            DateKeyword::Dns => &["dns"],
            DateKeyword::DnsCan => &["dns/can", "dns-can", "dnscan"],
            DateKeyword::Done => &["done"],
            DateKeyword::Infant => &["infant", "inf"],
            DateKeyword::NeverMarried => &["never married", "nevermarried"],
            DateKeyword::NotMarried => &["not married", "notmarried"],
            DateKeyword::Pre1970 => &["pre-1970", "pre 1970", "pre1970"],
            DateKeyword::Private => &["private", "prv"],
            DateKeyword::Stillborn => &["stillborn", "stillbirth", "sb"],
            DateKeyword::Submitted => &["submitted", "sub"],
            DateKeyword::Uncleared => &["uncleared", "unc"],
            DateKeyword::Unknown => &["unknown", "unk"],
            DateKeyword::Young => &["young"],
        }
    }

    /// Case-insensitive exact lookup, tolerating a leading `?` and
    /// surrounding whitespace.
    #[must_use]
    pub fn lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix('?').unwrap_or(text).trim_start();
        if text.is_empty() {
            return None;
        }
        let lower = text.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.spellings().contains(&lower.as_str()))
    }
}
