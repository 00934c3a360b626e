//! Bit-flag modifiers carried in the low nine bits of a packed date.

use serde::Serialize;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Combinable date modifiers.
///
/// `ABOUT` is the simultaneous `BEFORE | AFTER` bit pattern and is treated
/// as a single proximity state, never as two independently active flags;
/// use [`DateModifiers::proximity`] instead of testing the bits directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct DateModifiers(u32);

impl DateModifiers {
    pub const NONE: Self = Self(0);
    pub const BEFORE: Self = Self(0x001);
    pub const AFTER: Self = Self(0x002);
    /// The combined `BEFORE | AFTER` pattern: one proximity state.
    pub const ABOUT: Self = Self(0x003);
    pub const QUARTER: Self = Self(0x004);
    pub const YEAR_MISSING: Self = Self(0x008);
    pub const MONTH_MISSING: Self = Self(0x010);
    pub const DAY_MISSING: Self = Self(0x020);
    pub const DOUBLE_DATE: Self = Self(0x040);
    pub const CALCULATED: Self = Self(0x080);

    /// Mask of the nine bits reserved for modifiers in the packed form.
    pub const MASK: u32 = 0x1FF;

    /// Raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, discarding anything outside the modifier mask.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::MASK)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`. Note that
    /// `contains(ABOUT)` requires both proximity bits; use
    /// [`DateModifiers::proximity`] for proximity questions.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The proximity state encoded in the two low bits.
    #[must_use]
    pub const fn proximity(self) -> Proximity {
        match self.0 & Self::ABOUT.0 {
            0x003 => Proximity::About,
            0x001 => Proximity::Before,
            0x002 => Proximity::After,
            _ => Proximity::Exact,
        }
    }
}

/// The decoded proximity state of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Proximity {
    Exact,
    Before,
    After,
    About,
}

impl BitOr for DateModifiers {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DateModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DateModifiers {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for DateModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut parts: Vec<&str> = Vec::new();
        match self.proximity() {
            Proximity::Exact => {}
            Proximity::Before => parts.push("BEFORE"),
            Proximity::After => parts.push("AFTER"),
            Proximity::About => parts.push("ABOUT"),
        }
        for (flag, name) in [
            (Self::QUARTER, "QUARTER"),
            (Self::YEAR_MISSING, "YEAR_MISSING"),
            (Self::MONTH_MISSING, "MONTH_MISSING"),
            (Self::DAY_MISSING, "DAY_MISSING"),
            (Self::DOUBLE_DATE, "DOUBLE_DATE"),
            (Self::CALCULATED, "CALCULATED"),
        ] {
            if self.contains(flag) {
                parts.push(name);
            }
        }
        write!(f, "{}", parts.join("|"))
    }
}
