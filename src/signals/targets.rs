//! Decision packaging: price target and stop-loss sizing.

use crate::indicators::math::round2;
use crate::models::Verdict;

/// Attach a price target and stop-loss to a verdict.
///
/// Directional verdicts size from ATR when one is available (target two
/// ATRs out, stop one ATR against). Without a defined ATR, a fixed
/// percentage stands in. Neutral and Error fall back to a flat +-1% band.
/// Outputs are rounded to two decimals for presentation.
pub fn price_targets(verdict: Verdict, close: f64, atr: Option<f64>) -> (f64, f64) {
    let (target, stop) = match (verdict, atr) {
        (Verdict::Buy, Some(atr)) => (close + 2.0 * atr, close - atr),
        (Verdict::Sell, Some(atr)) => (close - 2.0 * atr, close + atr),
        (Verdict::Buy, None) => (close * 1.02, close * 0.99),
        (Verdict::Sell, None) => (close * 0.98, close * 1.01),
        (Verdict::Neutral, _) | (Verdict::Error, _) => (close * 1.01, close * 0.99),
    };
    (round2(target), round2(stop))
}
