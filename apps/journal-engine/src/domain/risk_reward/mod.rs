//! Risk-Reward Bounded Context
//!
//! Turns the entry, stop and target of a single trade into a reward-to-risk
//! ratio, validating that the price levels are ordered for the trade's
//! direction.
//!
//! # Price ordering
//!
//! - Buy: `stop < entry < target`
//! - Sell: `target < entry < stop`
//!
//! A stop equal to the entry has no risk and no defined ratio.

mod calculator;
mod errors;
mod rating;

pub use calculator::{PriceInputs, PriceLevels, RiskRewardCalculator, StoredRatioCheck};
pub use errors::RiskRewardError;
pub use rating::RiskRewardRating;
