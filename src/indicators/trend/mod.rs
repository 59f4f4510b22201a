pub mod ema;
pub mod sma;

pub use ema::ema_close_series;
pub use sma::sma_close_series;
