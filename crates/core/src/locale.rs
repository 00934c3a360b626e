//! Injected locale capability for date parsing and rendering.
//!
//! The parser and formatter never read process-global culture state; every
//! localized word they need (month names, qualifier words, range
//! connectors, modifier words, era words) comes from a [`Locale`] value
//! handed to them at construction time. The crate ships an English default
//! covering the spellings found in genealogical records.

use serde::{Deserialize, Serialize};

/// Which pair of era words is considered canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EraVocabulary {
    /// Render and expect `BC` / `AD`.
    #[default]
    BcAd,
    /// Render and expect `BCE` / `CE`.
    BceCe,
}

/// Localized words used when rendering date modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierWords {
    pub before: String,
    pub after: String,
    pub about: String,
    pub calculated: String,
}

/// Localized era words, both vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraWords {
    pub bc: String,
    pub ad: String,
    pub bce: String,
    pub ce: String,
}

/// All locale-specific vocabulary for parsing and formatting dates.
///
/// Word lists are matched case-insensitively and should be stored in
/// lowercase. Abbreviations may be written with or without a trailing
/// period in the input; the parser strips the period before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Full month names, January first.
    pub months_full: [String; 12],
    /// Abbreviated month names, January first.
    pub months_abbrev: [String; 12],
    /// Extra accepted month spellings, e.g. `("sept", 9)`.
    pub month_aliases: Vec<(String, u32)>,
    /// Leading words that mean "before this date".
    pub before_words: Vec<String>,
    /// Leading words that mean "after this date".
    pub after_words: Vec<String>,
    /// Leading words that mean "approximately this date".
    pub about_words: Vec<String>,
    /// Leading words that mean "derived from other evidence".
    pub calculated_words: Vec<String>,
    /// Leading words that announce a range ("between", "from").
    pub between_words: Vec<String>,
    /// Words joining the two ends of a range ("and", "to").
    pub range_connectors: Vec<String>,
    /// Words printed for modifiers when formatting.
    pub modifier_words: ModifierWords,
    /// Era words for both vocabularies.
    pub era_words: EraWords,
    /// Word used in spelled-out quarter dates ("2nd quarter 1900").
    pub quarter_word: String,
    /// Whether numeric dates put the day before the month (12/02 = 12 Feb).
    pub day_before_month: bool,
}

impl Locale {
    /// The English locale with the spellings common in genealogical data.
    #[must_use]
    pub fn english() -> Self {
        let full = [
            "january",
            "february",
            "march",
            "april",
            "may",
            "june",
            "july",
            "august",
            "september",
            "october",
            "november",
            "december",
        ];
        let abbrev = [
            "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct",
            "nov", "dec",
        ];
        Self {
            months_full: full.map(str::to_string),
            months_abbrev: abbrev.map(str::to_string),
            month_aliases: vec![("sept".to_string(), 9)],
            before_words: words(&["before", "bef", "ere"]),
            after_words: words(&["after", "aft", "since"]),
            about_words: words(&[
                "about",
                "abt",
                "circa",
                "ca",
                "c",
                "approx",
                "around",
                "est",
                "estimated",
            ]),
            calculated_words: words(&["calculated", "calc", "cal"]),
            between_words: words(&["between", "bet", "btw", "from"]),
            range_connectors: words(&["and", "to", "thru", "through"]),
            modifier_words: ModifierWords {
                before: "Before".to_string(),
                after: "After".to_string(),
                about: "about".to_string(),
                calculated: "Calculated".to_string(),
            },
            era_words: EraWords {
                bc: "BC".to_string(),
                ad: "AD".to_string(),
                bce: "BCE".to_string(),
                ce: "CE".to_string(),
            },
            quarter_word: "quarter".to_string(),
            day_before_month: true,
        }
    }

    /// Look up a month number (1-12) from a textual month.
    ///
    /// Accepts full names, abbreviations, registered aliases, and
    /// unambiguous prefixes of at least three characters ("janu", "septem").
    #[must_use]
    pub fn month_from_name(&self, name: &str) -> Option<u32> {
        let name = name.trim_end_matches('.').to_lowercase();
        if name.is_empty() {
            return None;
        }
        for (idx, abbrev) in self.months_abbrev.iter().enumerate() {
            if *abbrev == name {
                return u32::try_from(idx + 1).ok();
            }
        }
        for (alias, month) in &self.month_aliases {
            if *alias == name {
                return Some(*month);
            }
        }
        if name.len() >= 3 {
            for (idx, full) in self.months_full.iter().enumerate() {
                if full.starts_with(&name) {
                    return u32::try_from(idx + 1).ok();
                }
            }
        }
        None
    }

    /// Month name for rendering. `month` is 1-12.
    #[must_use]
    pub fn month_name(&self, month: u32, abbreviated: bool) -> Option<&str> {
        let idx = month.checked_sub(1)? as usize;
        let name = if abbreviated {
            self.months_abbrev.get(idx)?
        } else {
            self.months_full.get(idx)?
        };
        Some(name.as_str())
    }

    /// Regex alternation matching every accepted month spelling, longest
    /// spellings first so leftmost-first matching prefers the full name.
    #[must_use]
    pub fn month_alternation(&self) -> String {
        let mut names: Vec<&str> = self
            .months_full
            .iter()
            .chain(self.months_abbrev.iter())
            .map(String::as_str)
            .chain(self.month_aliases.iter().map(|(alias, _)| alias.as_str()))
            .collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();
        let escaped: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
        escaped.join("|")
    }

    /// Era word for rendering under the given vocabulary.
    #[must_use]
    pub fn era_word(&self, vocabulary: EraVocabulary, bce: bool) -> &str {
        match (vocabulary, bce) {
            (EraVocabulary::BcAd, true) => &self.era_words.bc,
            (EraVocabulary::BcAd, false) => &self.era_words.ad,
            (EraVocabulary::BceCe, true) => &self.era_words.bce,
            (EraVocabulary::BceCe, false) => &self.era_words.ce,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}
