//! Formatting utilities for analytics display.

use rust_decimal::Decimal;

use super::math::round_display;
use super::types::ProfitFactor;

/// Shown for an infinite profit factor.
pub const INFINITY_SYMBOL: &str = "∞";

/// Format a percentage value (already scaled to 0-100).
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", round_display(value))
}

/// Format a ratio with 2 decimal places.
#[must_use]
pub fn format_ratio(value: Decimal) -> String {
    format!("{:.2}", round_display(value))
}

/// Format a profit factor, rendering the infinite case as `∞`.
#[must_use]
pub fn format_profit_factor(value: &ProfitFactor) -> String {
    match value {
        ProfitFactor::Finite(v) => format_ratio(*v),
        ProfitFactor::Infinite => INFINITY_SYMBOL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pct(dec!(66.67)), "66.67%");
        assert_eq!(format_pct(dec!(50)), "50.00%");
        assert_eq!(format_ratio(dec!(2)), "2.00");
        assert_eq!(format_ratio(dec!(1.666)), "1.67");
    }

    #[test]
    fn infinite_profit_factor_is_distinct() {
        assert_eq!(format_profit_factor(&ProfitFactor::Infinite), "∞");
        assert_eq!(format_profit_factor(&ProfitFactor::Finite(dec!(1.5))), "1.50");
    }
}
