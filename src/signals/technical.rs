//! Technical evaluator: turns the latest indicator rows into one vote.
//!
//! Five independent sub-rules each contribute one unit to a buy or sell
//! tally. The vote goes to the side with at least two units that strictly
//! beats the other side; confidence is tally / 5 * 100.

use crate::models::{IndicatorFrame, IndicatorRow, SignalDirection, SignalVote};

/// Minimum candle count for a meaningful technical read.
pub const MIN_CANDLES: usize = 50;

const SOURCE: &str = "technical";
const RULE_COUNT: f64 = 5.0;

/// Evaluate the technical vote for the most recent bar of the frame.
/// Frames under [`MIN_CANDLES`] rows vote Neutral/0.
pub fn evaluate_technical(frame: &IndicatorFrame) -> SignalVote {
    if frame.len() < MIN_CANDLES {
        return SignalVote::neutral(SOURCE);
    }
    let (latest, prior) = match (frame.latest(), frame.prior()) {
        (Some(latest), Some(prior)) => (latest, prior),
        _ => return SignalVote::neutral(SOURCE),
    };
    evaluate_rows(prior, latest)
}

/// Rule evaluation against an explicit pair of rows. A rule abstains when
/// any value it needs is still in its warm-up window.
pub fn evaluate_rows(prior: &IndicatorRow, latest: &IndicatorRow) -> SignalVote {
    let mut buys = 0u32;
    let mut sells = 0u32;
    let mut tally = |direction: SignalDirection| match direction {
        SignalDirection::Buy => buys += 1,
        SignalDirection::Sell => sells += 1,
        SignalDirection::Neutral => {}
    };

    tally(rsi_rule(latest));
    tally(macd_rule(prior, latest));
    tally(bollinger_rule(latest));
    tally(sma_cross_rule(prior, latest));
    tally(stochastic_rule(prior, latest));

    let (direction, winning) = if buys > sells {
        (SignalDirection::Buy, buys)
    } else if sells > buys {
        (SignalDirection::Sell, sells)
    } else {
        return SignalVote::neutral(SOURCE);
    };

    if winning < 2 {
        return SignalVote::neutral(SOURCE);
    }

    let confidence = winning as f64 / RULE_COUNT * 100.0;
    SignalVote::new(SOURCE, direction, confidence)
}

fn rsi_rule(latest: &IndicatorRow) -> SignalDirection {
    match latest.rsi {
        Some(rsi) if rsi < 30.0 => SignalDirection::Buy,
        Some(rsi) if rsi > 70.0 => SignalDirection::Sell,
        _ => SignalDirection::Neutral,
    }
}

fn macd_rule(prior: &IndicatorRow, latest: &IndicatorRow) -> SignalDirection {
    let values = (
        latest.macd,
        latest.macd_signal,
        prior.macd,
        prior.macd_signal,
    );
    if let (Some(line), Some(signal), Some(prev_line), Some(prev_signal)) = values {
        if line > signal && prev_line <= prev_signal {
            return SignalDirection::Buy;
        }
        if line < signal && prev_line >= prev_signal {
            return SignalDirection::Sell;
        }
    }
    SignalDirection::Neutral
}

fn bollinger_rule(latest: &IndicatorRow) -> SignalDirection {
    if let (Some(upper), Some(lower)) = (latest.bb_upper, latest.bb_lower) {
        if latest.close < lower {
            return SignalDirection::Buy;
        }
        if latest.close > upper {
            return SignalDirection::Sell;
        }
    }
    SignalDirection::Neutral
}

fn sma_cross_rule(prior: &IndicatorRow, latest: &IndicatorRow) -> SignalDirection {
    let values = (latest.sma_20, latest.sma_50, prior.sma_20, prior.sma_50);
    if let (Some(fast), Some(slow), Some(prev_fast), Some(prev_slow)) = values {
        if fast > slow && prev_fast <= prev_slow {
            return SignalDirection::Buy;
        }
        if fast < slow && prev_fast >= prev_slow {
            return SignalDirection::Sell;
        }
    }
    SignalDirection::Neutral
}

fn stochastic_rule(prior: &IndicatorRow, latest: &IndicatorRow) -> SignalDirection {
    let values = (latest.stoch_k, latest.stoch_d, prior.stoch_k, prior.stoch_d);
    if let (Some(k), Some(d), Some(prev_k), Some(prev_d)) = values {
        if k < 20.0 && d < 20.0 && k > d && prev_k <= prev_d {
            return SignalDirection::Buy;
        }
        if k > 80.0 && d > 80.0 && k < d && prev_k >= prev_d {
            return SignalDirection::Sell;
        }
    }
    SignalDirection::Neutral
}
