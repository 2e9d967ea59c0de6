use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::engine::error::SplitError;

/// Post-processing flags for a split call, combined with `|`.
///
/// `CAMEL_CASE` only changes character-type splitting and is ignored by every
/// other delimiter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct SplitOptions(u8);

const FLAG_NAMES: [(SplitOptions, &str); 3] = [
    (SplitOptions::TRIM, "trim"),
    (SplitOptions::IGNORE_EMPTY, "ignore_empty"),
    (SplitOptions::CAMEL_CASE, "camel_case"),
];

impl SplitOptions {
    pub const NONE: Self = Self(0);
    /// Strip leading and trailing blanks from every token.
    pub const TRIM: Self = Self(1);
    /// Drop tokens that are empty after trimming.
    pub const IGNORE_EMPTY: Self = Self(2);
    pub const CAMEL_CASE: Self = Self(4);

    const ALL_BITS: u8 = 0b111;

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn from_bits(bits: u8) -> Result<Self, SplitError> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(SplitError::UnknownBits(bits));
        }
        Ok(Self(bits))
    }

    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SplitOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SplitOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for SplitOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl TryFrom<u8> for SplitOptions {
    type Error = SplitError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<SplitOptions> for u8 {
    fn from(options: SplitOptions) -> Self {
        options.bits()
    }
}

/// Parses flag names separated by `|` or `,`, e.g. `"trim|ignore_empty"`.
/// Names are case-insensitive; an empty string or `"none"` is NONE.
impl FromStr for SplitOptions {
    type Err = SplitError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let names = super::split_chars(
            Some(input),
            "|,",
            SplitOptions::TRIM | SplitOptions::IGNORE_EMPTY,
        );

        let mut options = SplitOptions::NONE;
        for name in names {
            if name.eq_ignore_ascii_case("none") {
                continue;
            }
            let flag = FLAG_NAMES
                .iter()
                .find(|(_, flag_name)| name.eq_ignore_ascii_case(flag_name))
                .map(|&(flag, _)| flag)
                .ok_or(SplitError::UnknownOption(name))?;
            options |= flag;
        }
        Ok(options)
    }
}

impl fmt::Display for SplitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, name)| name)
            .collect();

        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&crate::join::join_strs('|', Some(names.as_slice())).unwrap_or_default())
        }
    }
}
