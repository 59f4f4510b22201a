//! Shared data models spanning the engine layers.

pub mod candle;
pub mod frame;
pub mod signal;

pub use candle::Candle;
pub use frame::{IndicatorFrame, IndicatorRow};
pub use signal::{
    Decision, Fill, SentimentSnapshot, SignalDirection, SignalVote, Trade, Verdict,
};
