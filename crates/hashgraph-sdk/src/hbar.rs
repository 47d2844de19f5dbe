//! Hbar amounts, stored as signed tinybars.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Denominations of hbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HbarUnit {
    /// 1 tℏ, the smallest unit.
    Tinybar,
    /// 100 tℏ
    Microbar,
    /// 100 000 tℏ
    Millibar,
    /// 100 000 000 tℏ
    Hbar,
    /// 1 000 ℏ
    Kilobar,
    /// 1 000 000 ℏ
    Megabar,
    /// 1 000 000 000 ℏ
    Gigabar,
}

impl HbarUnit {
    const ALL: [Self; 7] = [
        Self::Tinybar,
        Self::Microbar,
        Self::Millibar,
        Self::Hbar,
        Self::Kilobar,
        Self::Megabar,
        Self::Gigabar,
    ];

    /// Tinybars in one of this unit.
    pub const fn tinybars(self) -> i64 {
        match self {
            Self::Tinybar => 1,
            Self::Microbar => 100,
            Self::Millibar => 100_000,
            Self::Hbar => 100_000_000,
            Self::Kilobar => 100_000_000_000,
            Self::Megabar => 100_000_000_000_000,
            Self::Gigabar => 100_000_000_000_000_000,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Tinybar => "tℏ",
            Self::Microbar => "μℏ",
            Self::Millibar => "mℏ",
            Self::Hbar => "ℏ",
            Self::Kilobar => "kℏ",
            Self::Megabar => "Mℏ",
            Self::Gigabar => "Gℏ",
        }
    }
}

impl fmt::Display for HbarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for HbarUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| Error::basic_parse(format!("unknown hbar unit `{s}`")))
    }
}

/// An amount of hbar.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hbar(i64);

impl Hbar {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(50_000_000_000 * 100_000_000);
    pub const MIN: Self = Self(-50_000_000_000 * 100_000_000);

    /// Whole hbars.
    pub const fn new(hbars: i64) -> Self {
        Self(hbars.saturating_mul(HbarUnit::Hbar.tinybars()))
    }

    pub const fn from_tinybars(tinybars: i64) -> Self {
        Self(tinybars)
    }

    pub const fn from_unit(amount: i64, unit: HbarUnit) -> Self {
        Self(amount.saturating_mul(unit.tinybars()))
    }

    pub const fn to_tinybars(self) -> i64 {
        self.0
    }

    pub const fn negated(self) -> Self {
        Self(self.0.saturating_neg())
    }

    /// Exact decimal value in `unit`, trailing zeros trimmed.
    pub fn to_string_in(self, unit: HbarUnit) -> String {
        let scale = unit.tinybars().unsigned_abs();
        let magnitude = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };

        let whole = magnitude / scale;
        let frac = magnitude % scale;
        if frac == 0 {
            return format!("{sign}{whole}");
        }

        let width = scale.ilog10() as usize;
        let frac = format!("{frac:0width$}");
        format!("{sign}{whole}.{}", frac.trim_end_matches('0'))
    }
}

impl fmt::Debug for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.unsigned_abs() < 10_000 {
            write!(f, "{} {}", self.0, HbarUnit::Tinybar)
        } else {
            write!(f, "{} {}", self.to_string_in(HbarUnit::Hbar), HbarUnit::Hbar)
        }
    }
}

impl FromStr for Hbar {
    type Err = Error;

    /// `"<decimal>[ <unit symbol>]"`, hbar when the unit is omitted.
    fn from_str(s: &str) -> Result<Self> {
        let (amount, unit) = match s.split_once(' ') {
            Some((amount, unit)) => (amount, unit.parse()?),
            None => (s, HbarUnit::Hbar),
        };

        parse_decimal(amount, unit).map(Self)
    }
}

fn parse_decimal(amount: &str, unit: HbarUnit) -> Result<i64> {
    let invalid = || Error::basic_parse(format!("invalid hbar amount `{amount}`"));

    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };

    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
        return Err(invalid());
    }

    let scale = i128::from(unit.tinybars());
    let whole: i128 = whole.parse().map_err(|_| invalid())?;
    let mut tinybars = whole.checked_mul(scale).ok_or_else(invalid)?;

    if !frac.is_empty() {
        let denominator = 10_i128.checked_pow(frac.len() as u32).ok_or_else(invalid)?;
        let numerator: i128 = frac.parse().map_err(|_| invalid())?;
        let scaled = numerator * scale;
        if scaled % denominator != 0 {
            return Err(Error::basic_parse(format!(
                "`{amount} {unit}` is not a whole number of tinybars"
            )));
        }
        tinybars += scaled / denominator;
    }

    if negative {
        tinybars = -tinybars;
    }

    i64::try_from(tinybars).map_err(|_| invalid())
}

impl Add for Hbar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Hbar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Hbar {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl Sum for Hbar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("1.5 ℏ".parse::<Hbar>().unwrap(), Hbar::from_tinybars(150_000_000));
        assert_eq!("150 tℏ".parse::<Hbar>().unwrap(), Hbar::from_tinybars(150));
        assert_eq!("2".parse::<Hbar>().unwrap(), Hbar::new(2));
        assert_eq!("-3 mℏ".parse::<Hbar>().unwrap(), Hbar::from_tinybars(-300_000));
        assert_eq!("1 Gℏ".parse::<Hbar>().unwrap(), Hbar::from_unit(1, HbarUnit::Gigabar));
    }

    #[test]
    fn test_parse_rejects_fractional_tinybars() {
        assert!("0.5 tℏ".parse::<Hbar>().is_err());
        assert!("0.000000001".parse::<Hbar>().is_err());
        assert!("1.5 xℏ".parse::<Hbar>().is_err());
        assert!(".5".parse::<Hbar>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Hbar::from_tinybars(150).to_string(), "150 tℏ");
        assert_eq!(Hbar::from_tinybars(150_000_000).to_string(), "1.5 ℏ");
        assert_eq!(Hbar::new(-2).to_string(), "-2 ℏ");
        assert_eq!(Hbar::from_tinybars(123_456).to_string_in(HbarUnit::Millibar), "1.23456");
    }

    #[test]
    fn test_display_parses_back() {
        for tinybars in [0, 1, 9_999, 10_000, 123_456_789, -5_000_000_001] {
            let hbar = Hbar::from_tinybars(tinybars);
            assert_eq!(hbar.to_string().parse::<Hbar>().unwrap(), hbar);
        }
    }

    #[test]
    fn test_arithmetic() {
        let total: Hbar = [Hbar::new(1), Hbar::new(2)].into_iter().sum();
        assert_eq!(total, Hbar::new(3));
        assert_eq!(-Hbar::new(1), Hbar::new(-1));
        assert_eq!(Hbar::new(5) - Hbar::new(2), Hbar::new(3));
    }
}
