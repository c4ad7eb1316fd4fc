//! Decimal constants for analytics.

use rust_decimal::Decimal;

pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
pub const ONE_AND_HALF: Decimal = Decimal::from_parts(15, 0, 0, false, 1); // 1.5
pub const TWO: Decimal = Decimal::TWO;
pub const THREE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Decimal places of reported figures.
pub const DISPLAY_DP: u32 = 2;

/// Number of most recent trading dates in the daily activity series.
pub const DEFAULT_DAILY_WINDOW: usize = 7;
