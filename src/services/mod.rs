//! External collaborators, specified at the boundary as traits.

pub mod binance;
pub mod execution;
pub mod market_data;
pub mod notifier;
pub mod sentiment;

pub use binance::BinanceMarketData;
pub use execution::{OrderExecutor, PaperExecutor};
pub use market_data::{MarketDataProvider, StaticMarketData};
pub use notifier::{render_decision, NoopNotifier, Notifier, TelegramNotifier};
pub use sentiment::{SentimentProvider, StaticSentiment};
