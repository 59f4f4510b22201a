//! Runtime configuration.
//!
//! All knobs live in one explicit value built from the environment and
//! passed into the pipeline context; nothing is read from ambient state at
//! evaluation time.

use std::env;

pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Primary symbol under analysis.
    pub symbol: String,
    /// Reference symbol for the correlation evaluator.
    pub reference_symbol: String,
    /// Candle interval requested from the market data source.
    pub interval: String,
    /// Candles fetched per run; must cover the 200-bar warm-up.
    pub candle_limit: usize,
    /// Recent trades fetched for whale detection.
    pub trade_limit: usize,
    /// Minimum notional value (quote units) for a trade to count as a whale.
    pub whale_notional_threshold: f64,
    /// Minimum decision confidence before notifying / trading.
    pub signal_threshold: f64,
    /// Seconds between scheduled analysis runs.
    pub analysis_interval_seconds: u64,
    /// Whether directional decisions are forwarded to the order executor.
    pub enable_auto_trading: bool,
    /// Order size for auto trading, in base units.
    pub order_quantity: f64,
    /// Decisions retained in the in-memory history.
    pub history_capacity: usize,
    pub http_port: u16,
    pub binance_base_url: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "BNBUSDT".to_string(),
            reference_symbol: "BTCUSDT".to_string(),
            interval: "1h".to_string(),
            candle_limit: 250,
            trade_limit: 1000,
            whale_notional_threshold: 10_000.0,
            signal_threshold: 65.0,
            analysis_interval_seconds: 3600,
            enable_auto_trading: false,
            order_quantity: 0.1,
            history_capacity: 1000,
            http_port: 8080,
            binance_base_url: "https://api.binance.com".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    /// `.env` loading is the caller's concern (see the binaries).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            symbol: env_or("TRADING_SYMBOL", defaults.symbol),
            reference_symbol: env_or("REFERENCE_SYMBOL", defaults.reference_symbol),
            interval: env_or("CANDLE_INTERVAL", defaults.interval),
            candle_limit: parse_env("CANDLE_LIMIT", defaults.candle_limit),
            trade_limit: parse_env("TRADE_LIMIT", defaults.trade_limit),
            whale_notional_threshold: parse_env(
                "WHALE_NOTIONAL_THRESHOLD",
                defaults.whale_notional_threshold,
            ),
            signal_threshold: parse_env("SIGNAL_THRESHOLD", defaults.signal_threshold),
            analysis_interval_seconds: parse_env(
                "ANALYSIS_INTERVAL_SECONDS",
                defaults.analysis_interval_seconds,
            ),
            enable_auto_trading: parse_env("ENABLE_AUTO_TRADING", defaults.enable_auto_trading),
            order_quantity: parse_env("ORDER_QUANTITY", defaults.order_quantity),
            history_capacity: parse_env("HISTORY_CAPACITY", defaults.history_capacity),
            http_port: parse_env("HTTP_PORT", defaults.http_port),
            binance_base_url: env_or("BINANCE_BASE_URL", defaults.binance_base_url),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok().filter(|v| !v.is_empty()),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
