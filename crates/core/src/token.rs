//! Token and voting-power amounts.

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An amount of tokens or voting power in whole units. The governance token
/// has no fractional display, so the raw value is the display value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Amount {
    raw: u64,
}

impl Amount {
    /// Convert a [`u64`] to an [`Amount`].
    pub const fn from_u64(x: u64) -> Self {
        Self { raw: x }
    }

    /// Zero [`Amount`].
    pub const fn zero() -> Self {
        Self { raw: 0 }
    }

    /// Check if [`Amount`] is zero.
    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Check if there are enough funds.
    pub fn can_spend(&self, amount: &Amount) -> bool {
        self.raw >= amount.raw
    }

    /// Get the raw [`u64`] value.
    pub fn raw_amount(&self) -> u64 {
        self.raw
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(&self, amount: Amount) -> Option<Self> {
        self.raw
            .checked_add(amount.raw)
            .map(|result| Self { raw: result })
    }

    /// Checked subtraction. Returns `None` on underflow.
    pub fn checked_sub(&self, amount: Amount) -> Option<Self> {
        self.raw
            .checked_sub(amount.raw)
            .map(|result| Self { raw: result })
    }
}

impl From<u64> for Amount {
    fn from(raw: u64) -> Self {
        Self { raw }
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.raw
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&grouped(self.raw))
    }
}

impl FromStr for Amount {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self {
            raw: s.parse::<u64>()?,
        })
    }
}

/// Render a raw value with `,` thousands separators, e.g. `2500000` into
/// `2,500,000`.
#[allow(clippy::arithmetic_side_effects)]
fn grouped(raw: u64) -> String {
    let digits = raw.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_amount_is_zero() {
        let zero = Amount::zero();
        assert!(zero.is_zero());

        let non_zero = Amount::from_u64(1);
        assert!(!non_zero.is_zero());
    }

    #[test]
    fn test_amount_checked_arithmetics() {
        let balance = Amount::from_u64(150_000);
        assert_eq!(
            balance.checked_add(Amount::from_u64(50_000)),
            Some(Amount::from_u64(200_000))
        );
        assert_eq!(
            balance.checked_sub(Amount::from_u64(150_000)),
            Some(Amount::zero())
        );
        assert_eq!(balance.checked_sub(Amount::from_u64(150_001)), None);
        assert_eq!(
            Amount::from_u64(u64::MAX).checked_add(Amount::from_u64(1)),
            None
        );
    }

    #[test]
    fn test_amount_can_spend() {
        let balance = Amount::from_u64(150_000);
        assert!(balance.can_spend(&Amount::from_u64(150_000)));
        assert!(balance.can_spend(&Amount::zero()));
        assert!(!balance.can_spend(&Amount::from_u64(150_001)));
    }

    #[test]
    fn test_amount_display_grouping() {
        assert_eq!(Amount::zero().to_string(), "0");
        assert_eq!(Amount::from_u64(999).to_string(), "999");
        assert_eq!(Amount::from_u64(1_000).to_string(), "1,000");
        assert_eq!(Amount::from_u64(500_000).to_string(), "500,000");
        assert_eq!(Amount::from_u64(2_500_000).to_string(), "2,500,000");
        assert_eq!(Amount::from_u64(15_000_000).to_string(), "15,000,000");
    }

    #[test]
    fn test_amount_from_str() {
        let amount: Amount = "150000".parse().expect("Test failed");
        assert_eq!(amount, Amount::from_u64(150_000));
        assert!("1,000".parse::<Amount>().is_err());
        assert!("-5".parse::<Amount>().is_err());
    }
}
