use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::throttle::RequestThrottle;
use crate::MarketDataSource;

/// Public CoinGecko REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

// Public-tier allowance; `with_throttle` adjusts this for paid tiers.
const DEFAULT_THROTTLE_CAPACITY: usize = 10;
const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_secs(60);

/// One row of the `/coins/markets` response, as the provider sends it.
///
/// Thin listings come back with `null` in the numeric columns, so every
/// consumed number is optional here and resolved during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// `/coins/{id}/market_chart` response: `[timestamp_ms, price]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<[f64; 2]>,
}

/// CoinGecko market data connector.
pub struct CoinGeckoClient {
    base_url: String,
    client: Client,
    throttle: RequestThrottle,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client somewhere else (proxy, test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
            throttle: RequestThrottle::new(DEFAULT_THROTTLE_CAPACITY, DEFAULT_THROTTLE_INTERVAL),
        }
    }

    /// Replace the default public-tier throttle.
    pub fn with_throttle(mut self, capacity: usize, interval: Duration) -> Self {
        self.throttle = RequestThrottle::new(capacity, interval);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        self.throttle.acquire().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn markets(&self, per_page: u32) -> Result<Vec<CoinMarket>, FetchError> {
        let rows: Vec<CoinMarket> = self
            .get_json(
                "/coins/markets",
                &[
                    ("vs_currency", "usd".to_string()),
                    ("order", "market_cap_desc".to_string()),
                    ("per_page", per_page.to_string()),
                    ("page", "1".to_string()),
                    ("sparkline", "false".to_string()),
                ],
            )
            .await?;

        info!("Fetched {} market rows from CoinGecko", rows.len());
        Ok(rows)
    }

    async fn market_chart(&self, coin_id: &str, days: u32) -> Result<MarketChart, FetchError> {
        let chart: MarketChart = self
            .get_json(
                &format!("/coins/{}/market_chart", coin_id),
                &[
                    ("vs_currency", "usd".to_string()),
                    ("days", days.to_string()),
                ],
            )
            .await?;

        info!(
            "Fetched {} price points for {} over {} days",
            chart.prices.len(),
            coin_id,
            days
        );
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markets_row() {
        let json = r#"[{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 51234.5,
            "market_cap": 1005600000000,
            "market_cap_rank": 1,
            "price_change_percentage_24h": 2.35
        }]"#;

        let rows: Vec<CoinMarket> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "bitcoin");
        assert_eq!(rows[0].symbol, "btc");
        assert_eq!(rows[0].current_price, Some(51234.5));
        assert_eq!(rows[0].market_cap_rank, Some(1));
    }

    #[test]
    fn test_parse_markets_row_with_nulls() {
        let json = r#"[{
            "id": "thincoin",
            "symbol": "thn",
            "name": "Thincoin",
            "current_price": null,
            "market_cap": null,
            "market_cap_rank": null,
            "price_change_percentage_24h": null
        }]"#;

        let rows: Vec<CoinMarket> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].current_price, None);
        assert_eq!(rows[0].market_cap, None);
    }

    #[test]
    fn test_parse_market_chart() {
        let json = r#"{
            "prices": [
                [1708627200000, 51234.5],
                [1708630800000, 51300.0]
            ]
        }"#;

        let chart: MarketChart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0][0], 1708627200000.0);
        assert_eq!(chart.prices[1][1], 51300.0);
    }

    #[tokio::test]
    async fn test_unreachable_provider_yields_transport_error() {
        // Nothing listens on this port; the connection is refused locally.
        let client = CoinGeckoClient::with_base_url("http://127.0.0.1:9");
        let result = client.markets(10).await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
