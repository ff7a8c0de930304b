use common::MarketEntry;

use crate::coingecko::CoinMarket;

/// Assets at or below this market cap (USD) never appear in any output.
pub const MARKET_CAP_FLOOR: f64 = 50_000_000.0;

/// Apply the market-cap floor and map provider rows to [`MarketEntry`].
///
/// Rows missing any consumed numeric field are dropped; provider order
/// (descending market cap) is preserved.
pub fn normalize_markets(rows: Vec<CoinMarket>, min_market_cap: f64) -> Vec<MarketEntry> {
    rows.into_iter()
        .filter_map(|row| normalize_row(row, min_market_cap))
        .collect()
}

fn normalize_row(row: CoinMarket, min_market_cap: f64) -> Option<MarketEntry> {
    let current_price = row.current_price?;
    let market_cap = row.market_cap?;
    let price_change_percentage_24h = row.price_change_percentage_24h?;
    let rank = row.market_cap_rank?;

    if market_cap <= min_market_cap {
        return None;
    }

    Some(MarketEntry {
        name: row.name,
        symbol: row.symbol.to_uppercase(),
        current_price,
        market_cap,
        price_change_percentage_24h,
        rank,
    })
}
