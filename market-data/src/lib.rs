//! Provider boundary for the crypto market signals workspace.
//!
//! Wraps the CoinGecko REST API behind the [`MarketDataSource`] trait so the
//! signal pipeline can run against a stub in tests, applies request
//! throttling at the boundary, and normalizes raw provider rows into
//! [`common::MarketEntry`] values.

mod coingecko;
mod error;
mod normalize;
mod throttle;

pub use coingecko::{CoinGeckoClient, CoinMarket, MarketChart, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use normalize::{normalize_markets, MARKET_CAP_FLOOR};
pub use throttle::RequestThrottle;

use async_trait::async_trait;

/// Raw-data seam over the upstream provider.
///
/// `per_page` is the page size of a single markets request, ordered by
/// descending market cap; `coin_id` is the provider's coin identifier.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn markets(&self, per_page: u32) -> Result<Vec<CoinMarket>, FetchError>;

    async fn market_chart(&self, coin_id: &str, days: u32) -> Result<MarketChart, FetchError>;
}
