//! Pure signal analysis: classification, price levels, risk/reward and
//! confidence scoring. Everything here takes explicit parameters so it can
//! be unit tested without any network mocking.

use common::{MarketEntry, Signal, SignalType};

use crate::config::{ConfidenceStrategy, SignalConfig};

/// Classify a 24h percentage move against the buy/sell thresholds.
pub fn classify(change_24h: f64, buy_threshold: f64, sell_threshold: f64) -> SignalType {
    if change_24h > buy_threshold {
        SignalType::Buy
    } else if change_24h < sell_threshold {
        SignalType::Sell
    } else {
        SignalType::Neutral
    }
}

/// Target price for a classified entry. Neutral leaves the price unchanged.
pub fn target_price(entry: f64, signal: SignalType, target_move: f64) -> f64 {
    match signal {
        SignalType::Buy => entry * (1.0 + target_move),
        SignalType::Sell => entry * (1.0 - target_move),
        SignalType::Neutral => entry,
    }
}

/// Stop-loss price for a classified entry. Sits on the opposite side of the
/// entry from the target.
pub fn stop_loss(entry: f64, signal: SignalType, stop_move: f64) -> f64 {
    match signal {
        SignalType::Buy => entry * (1.0 - stop_move),
        SignalType::Sell => entry * (1.0 + stop_move),
        SignalType::Neutral => entry,
    }
}

/// Signed percent difference between target and entry.
pub fn potential_gain_pct(entry: f64, target: f64) -> f64 {
    if entry == 0.0 {
        return 0.0;
    }
    (target - entry) / entry * 100.0
}

/// Risk/reward ratio formatted "1:R" to 2 decimals; "1:1" when the
/// potential loss is zero.
pub fn risk_reward(entry: f64, target: f64, stop: f64) -> String {
    let potential_profit = (target - entry).abs();
    let potential_loss = (entry - stop).abs();

    if potential_loss > 0.0 {
        format!("1:{:.2}", potential_profit / potential_loss)
    } else {
        "1:1".to_string()
    }
}

/// Deterministic confidence score: `min(floor(|change| * 2), 99)`.
pub fn price_change_confidence(change_24h: f64) -> u8 {
    (change_24h.abs() * 2.0).floor().min(99.0) as u8
}

/// Confidence score for the configured strategy.
pub fn confidence(strategy: ConfidenceStrategy, change_24h: f64) -> u8 {
    match strategy {
        ConfidenceStrategy::PriceChangeBased => price_change_confidence(change_24h),
        ConfidenceStrategy::Random => fastrand::u8(0..100),
    }
}

/// Derive a full [`Signal`] from one market entry.
pub fn build_signal(entry: &MarketEntry, config: &SignalConfig) -> Signal {
    let change = entry.price_change_percentage_24h;
    let signal_type = classify(change, config.buy_threshold, config.sell_threshold);

    let entry_price = entry.current_price;
    let target = target_price(entry_price, signal_type, config.target_move);
    let stop = stop_loss(entry_price, signal_type, config.stop_move);

    Signal {
        pair: format!("{}/USDT", entry.symbol),
        name: entry.name.clone(),
        signal_type,
        entry_price: format!("{:.4}", entry_price),
        target_price: format!("{:.4}", target),
        stop_loss: format!("{:.4}", stop),
        potential_gain: format!("{:.2}", potential_gain_pct(entry_price, target)),
        risk_reward: risk_reward(entry_price, target, stop),
        confidence: confidence(config.confidence_strategy, change),
        price_change_24h: format!("{:.2}", change),
    }
}
