//! Fetch live signals and a price history from the public CoinGecko API.

use signal_generation::{SignalService, DEFAULT_CHART_DAYS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let service = SignalService::new();

    println!("=== Ranked trade signals ===\n");
    let signals = service.crypto_signals_or_empty().await;
    for signal in &signals {
        println!(
            "{:<12} {:?}  entry {}  target {}  stop {}  gain {}%  rr {}  confidence {}",
            signal.pair,
            signal.signal_type,
            signal.entry_price,
            signal.target_price,
            signal.stop_loss,
            signal.potential_gain,
            signal.risk_reward,
            signal.confidence,
        );
    }
    println!("\n{} signals returned\n", signals.len());

    println!("=== Bitcoin price history ===\n");
    match service
        .historical_data_or_none("bitcoin", DEFAULT_CHART_DAYS)
        .await
    {
        Some(series) => {
            let dataset = &series.datasets[0];
            println!(
                "{}: {} points, first label {:?}",
                dataset.label,
                dataset.data.len(),
                series.labels.first(),
            );
        }
        None => println!("history unavailable"),
    }

    Ok(())
}
