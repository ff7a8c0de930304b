//! Shared data models for the crypto market signals workspace.
//!
//! Everything here is serialized with camelCase field names because the
//! downstream consumer is a JavaScript charting front end.

use serde::{Deserialize, Serialize};

/// Normalized snapshot of one asset's market data at fetch time.
///
/// Constructed once from a provider row and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEntry {
    pub name: String,
    /// Uppercased ticker, e.g. "BTC".
    pub symbol: String,
    pub current_price: f64,
    pub market_cap: f64,
    /// Signed percentage move over the last 24 hours.
    pub price_change_percentage_24h: f64,
    /// Market-cap rank as reported by the provider (1 = largest).
    pub rank: u32,
}

/// Directional classification of a trade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Neutral,
}

/// Derived trade recommendation for one asset.
///
/// Price levels are fixed-precision strings (4 fractional digits) and the
/// percentage fields carry exactly 2, matching what the front end renders
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Quote pair, e.g. "BTC/USDT".
    pub pair: String,
    pub name: String,
    pub signal_type: SignalType,
    pub entry_price: String,
    pub target_price: String,
    pub stop_loss: String,
    /// Signed percent difference between target and entry.
    pub potential_gain: String,
    /// "1:R" with R to 2 decimals, or the literal "1:1" when the potential
    /// loss is zero.
    pub risk_reward: String,
    /// 0..=99.
    pub confidence: u8,
    pub price_change_24h: String,
}

/// Label/dataset pair ready for direct consumption by a chart component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub tension: f64,
}
