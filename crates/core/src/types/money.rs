//! Monetary amounts for display.
//!
//! Records keep raw `Decimal` amounts so that sums stay exact; [`Money`]
//! pairs an amount with its currency when it is time to show it.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create an amount in Indian rupees, the backend's billing currency.
    #[must_use]
    pub const fn inr(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::INR)
    }

    /// The amount rounded half-up to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{}{:.2}",
            self.currency_code.symbol(),
            rounded.abs()
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_inr() {
        assert_eq!(Money::inr(Decimal::from(1499)).to_string(), "₹1499.00");
        assert_eq!(Money::inr(Decimal::new(99_995, 3)).to_string(), "₹100.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::inr(Decimal::new(-2550, 2)).to_string(), "-₹25.50");
    }

    #[test]
    fn test_display_usd() {
        let money = Money::new(Decimal::new(125, 1), CurrencyCode::USD);
        assert_eq!(money.to_string(), "$12.50");
    }
}
