//! Cross-asset correlation evaluator.
//!
//! Coarse heuristic: the primary asset is assumed to follow its reference
//! when they correlate positively and to move against it when they correlate
//! negatively, with confidence banded on |r|.

use crate::indicators::math;
use crate::models::{SignalDirection, SignalVote};

const SOURCE: &str = "correlation";

/// Evaluate the correlation vote from two close-price series.
///
/// Both series are trimmed to the shorter length, anchored at the most
/// recent point. Fewer than two overlapping points, or a degenerate
/// (zero-variance) window, votes Neutral/0.
pub fn evaluate_correlation(primary: &[f64], reference: &[f64]) -> SignalVote {
    let overlap = primary.len().min(reference.len());
    if overlap < 2 {
        return SignalVote::neutral(SOURCE);
    }

    let primary = &primary[primary.len() - overlap..];
    let reference = &reference[reference.len() - overlap..];

    let r = match math::pearson(primary, reference) {
        Some(r) if r.is_finite() => r,
        _ => return SignalVote::neutral(SOURCE),
    };

    let confidence = if r.abs() >= 0.7 {
        70.0
    } else if r.abs() >= 0.3 {
        50.0
    } else {
        return SignalVote::neutral(SOURCE);
    };

    // Follow the reference asset's in-window trend on positive correlation,
    // invert it on negative correlation.
    let reference_bullish = reference[overlap - 1] > reference[0];
    let direction = if reference_bullish == (r >= 0.0) {
        SignalDirection::Buy
    } else {
        SignalDirection::Sell
    };

    SignalVote::new(SOURCE, direction, confidence)
}
