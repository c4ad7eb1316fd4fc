//! Market a trade was taken in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Market segment. Informational only, never used in statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// Futures contracts.
    Futures,
    /// Spot FX pairs.
    Forex,
    /// Crypto assets.
    Crypto,
}

impl Market {
    /// All markets in display order.
    pub const ALL: [Self; 3] = [Self::Futures, Self::Forex, Self::Crypto];

    /// Trading pairs offered by the entry form for this market.
    #[must_use]
    pub const fn trading_pairs(&self) -> &'static [&'static str] {
        match self {
            Self::Futures => &["NQ", "GC", "CL", "ES"],
            Self::Forex => &[
                "EUR/USD", "GBP/USD", "USD/JPY", "AUD/USD", "USD/CAD", "USD/CHF", "NZD/USD",
            ],
            Self::Crypto => &["BTC", "ETH", "AVAX", "SOL", "XRP", "ADA", "DOT"],
        }
    }

    /// Symbol preselected when this market is chosen.
    #[must_use]
    pub const fn default_symbol(&self) -> &'static str {
        self.trading_pairs()[0]
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Futures => "futures",
            Self::Forex => "forex",
            Self::Crypto => "crypto",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
