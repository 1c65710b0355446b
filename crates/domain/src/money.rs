//! Monetary amounts in integer cents.

use serde::{Deserialize, Serialize};

/// An amount of money in cents.
///
/// Prices and totals are whole cents everywhere: in the domain, in events
/// and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Line total for `quantity` units at this price.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }

    /// Returns `percentage` percent of this amount, rounded half away from
    /// zero, or `None` if it does not fit in cents.
    pub fn percentage(&self, percentage: i64) -> Option<Money> {
        let scaled = self.cents.checked_mul(percentage)?;
        let rounded = if scaled >= 0 {
            scaled.checked_add(50)? / 100
        } else {
            scaled.checked_sub(50)? / 100
        };
        Some(Money { cents: rounded })
    }

    /// Adds two amounts, or `None` on overflow.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.cents.checked_add(rhs.cents).map(Money::from_cents)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_money_line_total() {
        assert_eq!(Money::from_cents(1000).multiply(3).cents(), 3000);
        assert!(Money::from_cents(1000).multiply(0).is_zero());
    }

    #[test]
    fn test_money_percentage_rounds_half_away_from_zero() {
        let percent = |cents: i64, pct: i64| Money::from_cents(cents).percentage(pct).unwrap().cents();

        assert_eq!(percent(1000, 100), 1000);
        assert_eq!(percent(1000, 10), 100);
        assert_eq!(percent(985, 10), 99);
        assert_eq!(percent(-985, 10), -99);
    }

    #[test]
    fn test_money_percentage_overflow_is_none() {
        assert_eq!(Money::from_cents(1000).percentage(i64::MAX / 100), None);
        assert_eq!(Money::from_cents(-1000).percentage(i64::MAX), None);
        assert_eq!(Money::from_cents(1).percentage(i64::MAX), None);
    }

    #[test]
    fn test_money_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [100, 250, 650].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 1000);
        assert!(std::iter::empty::<Money>().sum::<Money>().is_zero());
    }
}
