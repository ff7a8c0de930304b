//! Heuristic trade-signal pipeline over CoinGecko market data.
//!
//! [`SignalService`] exposes three operations: the filtered top-crypto
//! listing, ranked buy/sell signals, and chart-ready price history. The core
//! API returns `Result<_, FetchError>` so callers can tell a failed request
//! from an empty dataset; the `_or_*` wrappers log the failure and hand back
//! a benign empty value for callers that treat the two alike.

mod analysis;
mod chart;
mod config;
mod ranking;

pub use analysis::{
    build_signal, classify, confidence, potential_gain_pct, price_change_confidence, risk_reward,
    stop_loss, target_price,
};
pub use chart::{build_chart_series, DEFAULT_CHART_DAYS};
pub use config::{load_config, ConfidenceStrategy, SignalConfig};
pub use ranking::rank;

use common::{ChartSeries, MarketEntry, Signal};
use market_data::{normalize_markets, CoinGeckoClient, FetchError, MarketDataSource};
use tracing::error;

/// Stateless facade over the market data source and the signal pipeline.
///
/// Every call performs a fresh request; nothing is cached or shared between
/// invocations.
pub struct SignalService<S = CoinGeckoClient> {
    source: S,
    config: SignalConfig,
}

impl SignalService<CoinGeckoClient> {
    /// Service against the public CoinGecko API with default configuration.
    pub fn new() -> Self {
        Self::with_config(SignalConfig::default())
    }

    pub fn with_config(config: SignalConfig) -> Self {
        Self {
            source: CoinGeckoClient::new(),
            config,
        }
    }
}

impl Default for SignalService<CoinGeckoClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MarketDataSource> SignalService<S> {
    /// Service over any raw data source; used by tests with a stub.
    pub fn with_source(source: S, config: SignalConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Top listing by market cap, floor-filtered and normalized.
    pub async fn top_cryptos(&self) -> Result<Vec<MarketEntry>, FetchError> {
        let rows = self.source.markets(self.config.listing_page_size).await?;
        Ok(normalize_markets(rows, self.config.min_market_cap))
    }

    /// Ranked buy/sell signals for the highest-cap entries.
    ///
    /// Neutral classifications are produced transiently and dropped by the
    /// ranker; the result is sorted descending by absolute potential gain
    /// and truncated to `config.max_signals`.
    pub async fn crypto_signals(&self) -> Result<Vec<Signal>, FetchError> {
        let rows = self.source.markets(self.config.signal_page_size).await?;
        let entries = normalize_markets(rows, self.config.min_market_cap);

        let signals = entries
            .iter()
            .map(|entry| build_signal(entry, &self.config))
            .collect();

        Ok(rank(signals, self.config.max_signals))
    }

    /// Price history for `symbol` over `days` days as a chart descriptor.
    ///
    /// The lowercased symbol is passed through as the provider coin id;
    /// no symbol resolution is attempted.
    pub async fn historical_data(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<ChartSeries, FetchError> {
        let coin_id = symbol.to_lowercase();
        let chart = self.source.market_chart(&coin_id, days).await?;
        Ok(build_chart_series(symbol, &chart))
    }

    /// Lenient variant of [`top_cryptos`](Self::top_cryptos): logs and
    /// returns an empty listing on failure.
    pub async fn top_cryptos_or_empty(&self) -> Vec<MarketEntry> {
        match self.top_cryptos().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error fetching top cryptocurrencies: {}", e);
                Vec::new()
            }
        }
    }

    /// Lenient variant of [`crypto_signals`](Self::crypto_signals).
    pub async fn crypto_signals_or_empty(&self) -> Vec<Signal> {
        match self.crypto_signals().await {
            Ok(signals) => signals,
            Err(e) => {
                error!("Error generating crypto signals: {}", e);
                Vec::new()
            }
        }
    }

    /// Lenient variant of [`historical_data`](Self::historical_data).
    pub async fn historical_data_or_none(&self, symbol: &str, days: u32) -> Option<ChartSeries> {
        match self.historical_data(symbol, days).await {
            Ok(series) => Some(series),
            Err(e) => {
                error!("Error fetching historical data for {}: {}", symbol, e);
                None
            }
        }
    }
}
