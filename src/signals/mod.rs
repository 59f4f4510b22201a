//! Signal evaluation interfaces.

pub mod aggregation;
pub mod correlation;
pub mod sentiment;
pub mod targets;
pub mod technical;
pub mod whale;

pub use aggregation::aggregate;
pub use correlation::evaluate_correlation;
pub use sentiment::evaluate_sentiment;
pub use targets::price_targets;
pub use technical::{evaluate_technical, MIN_CANDLES};
pub use whale::evaluate_whales;
