//! Chart-ready series assembly from a provider price history.

use chrono::{TimeZone, Utc};
use common::{ChartDataset, ChartSeries};
use market_data::MarketChart;

/// History window used when the caller does not pick one.
pub const DEFAULT_CHART_DAYS: u32 = 30;

// Styling the front end expects on the single price series.
const SERIES_BORDER_COLOR: &str = "rgb(75, 192, 192)";
const SERIES_TENSION: f64 = 0.1;

/// Build a single-series chart descriptor from `[timestamp_ms, price]`
/// points. Labels are the UTC timestamp of each point; label count always
/// equals data count.
pub fn build_chart_series(symbol: &str, chart: &MarketChart) -> ChartSeries {
    let labels = chart
        .prices
        .iter()
        .map(|point| format_label(point[0]))
        .collect();
    let data = chart.prices.iter().map(|point| point[1]).collect();

    ChartSeries {
        labels,
        datasets: vec![ChartDataset {
            label: format!("{} Price", symbol.to_uppercase()),
            data,
            border_color: SERIES_BORDER_COLOR.to_string(),
            tension: SERIES_TENSION,
        }],
    }
}

fn format_label(timestamp_ms: f64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms as i64)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}
