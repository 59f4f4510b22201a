pub mod atr;
pub mod bollinger;

pub use atr::atr_series;
pub use bollinger::bollinger_series;
