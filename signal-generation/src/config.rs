//! Signal pipeline configuration

use market_data::MARKET_CAP_FLOOR;
use serde::{Deserialize, Serialize};

/// How the confidence score of a signal is produced.
///
/// `PriceChangeBased` derives the score from the 24h move and is the
/// default; `Random` substitutes a uniformly random score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceStrategy {
    #[default]
    PriceChangeBased,
    Random,
}

/// Tunables for signal classification and ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Confidence score source.
    #[serde(default)]
    pub confidence_strategy: ConfidenceStrategy,

    /// 24h change (percent) above which an entry classifies as BUY.
    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: f64,

    /// 24h change (percent) below which an entry classifies as SELL.
    #[serde(default = "default_sell_threshold")]
    pub sell_threshold: f64,

    /// Target distance from entry, as a fraction (0.10 = 10%).
    #[serde(default = "default_target_move")]
    pub target_move: f64,

    /// Stop-loss distance from entry, as a fraction (0.05 = 5%).
    #[serde(default = "default_stop_move")]
    pub stop_move: f64,

    /// Maximum number of ranked signals returned.
    #[serde(default = "default_max_signals")]
    pub max_signals: usize,

    /// Entries at or below this market cap (USD) are excluded everywhere.
    #[serde(default = "default_min_market_cap")]
    pub min_market_cap: f64,

    /// Page size for the top-crypto listing request.
    #[serde(default = "default_listing_page_size")]
    pub listing_page_size: u32,

    /// Page size for the signal-generation request.
    #[serde(default = "default_signal_page_size")]
    pub signal_page_size: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            confidence_strategy: ConfidenceStrategy::default(),
            buy_threshold: default_buy_threshold(),
            sell_threshold: default_sell_threshold(),
            target_move: default_target_move(),
            stop_move: default_stop_move(),
            max_signals: default_max_signals(),
            min_market_cap: default_min_market_cap(),
            listing_page_size: default_listing_page_size(),
            signal_page_size: default_signal_page_size(),
        }
    }
}

fn default_buy_threshold() -> f64 {
    5.0
}

fn default_sell_threshold() -> f64 {
    -5.0
}

fn default_target_move() -> f64 {
    0.10
}

fn default_stop_move() -> f64 {
    0.05
}

fn default_max_signals() -> usize {
    20
}

fn default_min_market_cap() -> f64 {
    MARKET_CAP_FLOOR
}

fn default_listing_page_size() -> u32 {
    500
}

fn default_signal_page_size() -> u32 {
    100
}

/// Load configuration from a TOML file.
pub fn load_config(path: &str) -> anyhow::Result<SignalConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SignalConfig = toml::from_str(&content)?;
    Ok(config)
}
