//! Format pattern tokens.
//!
//! A pattern is a token string: `yyyy` (year), `MMMM` / `MMM` (full or
//! abbreviated month name), `MM` / `M` (zero-padded or plain numeric
//! month), `dd` / `d` (zero-padded or plain numeric day), `mod` (modifier
//! word). Everything else is a literal delimiter. Token matching is
//! case-sensitive and longest-first, so `MMM` never splits into `MM` + `M`.

/// One unit of a compiled format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    YearFull,
    MonthFull,
    MonthAbbrev,
    MonthPadded,
    MonthNumeric,
    DayPadded,
    DayNumeric,
    Modifier,
    Literal(String),
}

impl Token {
    fn is_month(&self) -> bool {
        matches!(
            self,
            Token::MonthFull
                | Token::MonthAbbrev
                | Token::MonthPadded
                | Token::MonthNumeric
        )
    }

    fn is_day(&self) -> bool {
        matches!(self, Token::DayPadded | Token::DayNumeric)
    }
}

/// The named patterns most callers want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandardPattern {
    /// "12 Feb 1900" style.
    #[default]
    DayMonthYear,
    /// "Feb 12, 1900" style.
    MonthDayYear,
    /// "1900 Feb 12" style.
    YearMonthDay,
}

impl StandardPattern {
    #[must_use]
    pub fn token_string(self) -> &'static str {
        match self {
            StandardPattern::DayMonthYear => "mod d MMM yyyy",
            StandardPattern::MonthDayYear => "mod MMM d, yyyy",
            StandardPattern::YearMonthDay => "mod yyyy MMM d",
        }
    }
}

/// A compiled format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pub(crate) tokens: Vec<Token>,
}

impl DatePattern {
    /// Compile a custom token string. Unknown characters become literals,
    /// so compilation cannot fail.
    #[must_use]
    pub fn custom(pattern: &str) -> Self {
        Self { tokens: tokenize(pattern) }
    }

    #[must_use]
    pub fn standard(which: StandardPattern) -> Self {
        Self::custom(which.token_string())
    }

    /// Whether the day field comes before the month field, which decides
    /// which end of a same-month range keeps its month.
    #[must_use]
    pub fn day_before_month(&self) -> bool {
        let day = self.tokens.iter().position(Token::is_day);
        let month = self.tokens.iter().position(Token::is_month);
        match (day, month) {
            (Some(d), Some(m)) => d < m,
            _ => true,
        }
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::standard(StandardPattern::default())
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        let token = if rest.starts_with("yyyy") {
            Some((Token::YearFull, 4))
        } else if rest.starts_with("MMMM") {
            Some((Token::MonthFull, 4))
        } else if rest.starts_with("MMM") {
            Some((Token::MonthAbbrev, 3))
        } else if rest.starts_with("MM") {
            Some((Token::MonthPadded, 2))
        } else if rest.starts_with('M') {
            Some((Token::MonthNumeric, 1))
        } else if rest.starts_with("mod") {
            Some((Token::Modifier, 3))
        } else if rest.starts_with("dd") {
            Some((Token::DayPadded, 2))
        } else if rest.starts_with('d') {
            Some((Token::DayNumeric, 1))
        } else {
            None
        };

        match token {
            Some((token, len)) => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(token);
                rest = &rest[len..];
            }
            None => {
                let c = rest.chars().next().expect("non-empty remainder");
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}
