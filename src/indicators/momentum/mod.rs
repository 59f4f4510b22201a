pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use macd::macd_series;
pub use rsi::rsi_series;
pub use stochastic::stochastic_series;
