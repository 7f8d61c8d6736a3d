//! Money type for representing currency amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point precision
//! issues. Amounts accumulate exactly in minor units; rounding to two decimal
//! places only happens where an operation inherently produces fractions
//! (percentages, fractional quantities) and at display time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as paise (hundredths of a rupee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from whole rupees
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Take a whole-number percentage of this amount, rounded half away
    /// from zero to the nearest paisa
    pub fn percent(&self, pct: i64) -> Self {
        let numerator = self.0 * pct;
        let rounded = if numerator >= 0 {
            (numerator + 50) / 100
        } else {
            (numerator - 50) / 100
        };
        Self(rounded)
    }

    /// Multiply by a (possibly fractional) quantity, rounded half away from
    /// zero to the nearest paisa
    pub fn times(&self, quantity: f64) -> Self {
        Self((self.0 as f64 * quantity).round() as i64)
    }

    /// Split into two halves that sum exactly to the original amount
    ///
    /// When the amount has an odd number of paise the second half carries
    /// the extra paisa.
    pub const fn split_half(&self) -> (Self, Self) {
        let first = self.0 / 2;
        (Self(first), Self(self.0 - first))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('₹').unwrap_or(s);
        let s = s.strip_prefix("Rs.").unwrap_or(s).trim_start();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let paise = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let rupees: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate paise to 2 digits
            let paise_str = parts[1];
            let paise: i64 = match paise_str.len() {
                0 => 0,
                1 => {
                    paise_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => paise_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            rupees * 100 + paise
        } else {
            // Integer format - assume whole rupees
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -paise } else { paise }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.rupees().abs(), self.paise_part())
        } else {
            format!("{}{}.{:02}", symbol, self.rupees(), self.paise_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-₹{}.{:02}", self.rupees().abs(), self.paise_part())
        } else {
            write!(f, "₹{}.{:02}", self.rupees(), self.paise_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let m = Money::from_paise(1050);
        assert_eq!(m.paise(), 1050);
        assert_eq!(m.rupees(), 10);
        assert_eq!(m.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        let m = Money::from_rupees(100);
        assert_eq!(m.paise(), 10000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1050)), "₹10.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
        assert_eq!(format!("{}", Money::from_paise(-1050)), "-₹10.50");
        assert_eq!(format!("{}", Money::from_paise(5)), "₹0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((-a).paise(), -1000);
    }

    #[test]
    fn test_percent() {
        // 18% of ₹250.00 = ₹45.00
        assert_eq!(Money::from_rupees(250).percent(18).paise(), 4500);
        // 18% of ₹0.03 = 0.54 paise, rounds to 1 paisa
        assert_eq!(Money::from_paise(3).percent(18).paise(), 1);
        // Rounds half away from zero for negatives too
        assert_eq!(Money::from_paise(-3).percent(18).paise(), -1);
        assert_eq!(Money::from_rupees(100).percent(0).paise(), 0);
    }

    #[test]
    fn test_times() {
        assert_eq!(Money::from_rupees(100).times(2.0).paise(), 20000);
        assert_eq!(Money::from_rupees(10).times(0.5).paise(), 500);
        assert_eq!(Money::from_paise(999).times(1.5).paise(), 1499);
    }

    #[test]
    fn test_split_half_sums_exactly() {
        for paise in [0, 1, 2, 99, 4500, 4501, -7] {
            let m = Money::from_paise(paise);
            let (a, b) = m.split_half();
            assert_eq!(a + b, m, "split of {} paise must sum exactly", paise);
        }
        let (cgst, sgst) = Money::from_paise(4500).split_half();
        assert_eq!(cgst.paise(), 2250);
        assert_eq!(sgst.paise(), 2250);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().paise(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().paise(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().paise(), -1050);
        assert_eq!(Money::parse("10").unwrap().paise(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().paise(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().paise(), 5);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_paise(100),
            Money::from_paise(200),
            Money::from_paise(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.paise(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_paise(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
