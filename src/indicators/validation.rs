//! Input validation for candle series.

use crate::error::EngineError;
use crate::models::Candle;

/// Reject malformed candle series outright rather than coercing them.
///
/// A valid series is non-empty, strictly increasing in timestamp, and holds
/// only finite prices and volumes.
pub fn validate_series(candles: &[Candle]) -> Result<(), EngineError> {
    if candles.is_empty() {
        return Err(EngineError::InvalidInput("empty candle series".to_string()));
    }

    for (i, candle) in candles.iter().enumerate() {
        if !candle.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "non-finite value in candle at index {} (timestamp {})",
                i, candle.timestamp
            )));
        }
        if i > 0 && candle.timestamp <= candles[i - 1].timestamp {
            return Err(EngineError::InvalidInput(format!(
                "non-monotonic timestamp at index {}: {} follows {}",
                i,
                candle.timestamp,
                candles[i - 1].timestamp
            )));
        }
    }

    Ok(())
}
