//! Arithmetic helpers shared by the analytics functions.

use rust_decimal::{Decimal, RoundingStrategy};

use super::constants::{DISPLAY_DP, HUNDRED};

/// Mean of a slice of decimals.
///
/// Falls back to summing `value / n` terms when the plain sum leaves the
/// decimal range; `None` for empty input or if even that overflows.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let count = Decimal::from(values.len() as u64);
    match checked_sum(values.iter().copied()) {
        Some(sum) => Some(sum / count),
        None => checked_sum(values.iter().map(|value| value / count)),
    }
}

/// Sum, or `None` on overflow.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) / Decimal::from(whole) * HUNDRED
}

/// Round a reported figure to 2 dp, midpoints away from zero.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}
