//! Formatting and parsing helpers for money values shown on the CLI.

use crate::errors::{AppError, AppResult};
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "$";

/// `$1234.50`: currency symbol, two decimal places, half away from zero.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", CURRENCY_SYMBOL, rounded)
}

/// Parse user-entered numeric text (amount, litres, price) as a decimal.
pub fn parse_amount(s: &str) -> AppResult<Decimal> {
    let trimmed = s.trim();
    trimmed
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidAmount(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_is_rounded_to_cents() {
        assert_eq!(format_money(Decimal::from(1300)), "$1300.00");
        assert_eq!(format_money("12.345".parse().unwrap()), "$12.35");
        assert_eq!(format_money("-0.5".parse().unwrap()), "$-0.50");
    }

    #[test]
    fn amount_parsing_rejects_garbage() {
        assert_eq!(parse_amount(" 200 ").unwrap(), Decimal::from(200));
        assert_eq!(parse_amount("12.50").unwrap().to_string(), "12.50");
        assert!(matches!(parse_amount("12,50"), Err(AppError::InvalidAmount(_))));
        assert!(matches!(parse_amount(""), Err(AppError::InvalidAmount(_))));
    }
}
