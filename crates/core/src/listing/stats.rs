//! Helpers for summary-card arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

/// `part / whole` as a percentage rounded to two places; 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part * Decimal::ONE_HUNDRED / whole)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// [`percentage`] for record counts.
#[must_use]
pub fn percentage_of_count(part: usize, whole: usize) -> Decimal {
    percentage(Decimal::from(part), Decimal::from(whole))
}

/// Sum a sequence of amounts.
pub fn sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, x| acc + x)
}

/// Arithmetic mean, or `None` for an empty input.
#[must_use]
pub fn mean(total: Decimal, count: usize) -> Option<Decimal> {
    total
        .checked_div(Decimal::from(count))
        .map(|m| m.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_guards_zero() {
        assert_eq!(percentage(Decimal::from(5), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percentage_of_count(0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage_of_count(1, 3), Decimal::new(3333, 2));
        assert_eq!(percentage_of_count(3, 4), Decimal::from(75));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(Decimal::from(10), 4), Some(Decimal::new(250, 2)));
        assert_eq!(mean(Decimal::from(10), 0), None);
    }
}
