pub mod obv;

pub use obv::obv_series;
