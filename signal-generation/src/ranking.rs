//! Ranked selection of actionable signals.

use std::cmp::Ordering;

use common::{Signal, SignalType};

/// Drop Neutral signals, sort descending by absolute potential gain and keep
/// the first `max`. The sort is stable, so ties keep their prior order.
pub fn rank(mut signals: Vec<Signal>, max: usize) -> Vec<Signal> {
    signals.retain(|s| s.signal_type != SignalType::Neutral);
    signals.sort_by(|a, b| {
        abs_gain(b)
            .partial_cmp(&abs_gain(a))
            .unwrap_or(Ordering::Equal)
    });
    signals.truncate(max);
    signals
}

fn abs_gain(signal: &Signal) -> f64 {
    signal.potential_gain.parse::<f64>().unwrap_or(0.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(name: &str, signal_type: SignalType, potential_gain: &str) -> Signal {
        Signal {
            pair: format!("{}/USDT", name),
            name: name.to_string(),
            signal_type,
            entry_price: "100.0000".to_string(),
            target_price: "110.0000".to_string(),
            stop_loss: "95.0000".to_string(),
            potential_gain: potential_gain.to_string(),
            risk_reward: "1:2.00".to_string(),
            confidence: 10,
            price_change_24h: "6.00".to_string(),
        }
    }

    #[test]
    fn test_neutral_signals_are_dropped() {
        let ranked = rank(
            vec![
                signal("a", SignalType::Buy, "10.00"),
                signal("b", SignalType::Neutral, "0.00"),
                signal("c", SignalType::Sell, "-10.00"),
            ],
            20,
        );

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.signal_type != SignalType::Neutral));
    }

    #[test]
    fn test_sorted_by_absolute_gain_descending() {
        let ranked = rank(
            vec![
                signal("small", SignalType::Buy, "10.00"),
                signal("negative", SignalType::Sell, "-25.00"),
                signal("large", SignalType::Buy, "15.00"),
            ],
            20,
        );

        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["negative", "large", "small"]);

        for pair in ranked.windows(2) {
            let a = pair[0].potential_gain.parse::<f64>().unwrap().abs();
            let b = pair[1].potential_gain.parse::<f64>().unwrap().abs();
            assert!(a >= b);
        }
    }

    #[test]
    fn test_truncated_to_max() {
        let signals: Vec<Signal> = (0..30)
            .map(|i| signal(&format!("s{}", i), SignalType::Buy, "10.00"))
            .collect();

        assert_eq!(rank(signals, 20).len(), 20);
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let ranked = rank(
            vec![
                signal("first", SignalType::Buy, "10.00"),
                signal("second", SignalType::Sell, "-10.00"),
                signal("third", SignalType::Buy, "10.00"),
            ],
            20,
        );

        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(rank(Vec::new(), 20).is_empty());
    }
}
