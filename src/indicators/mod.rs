pub mod engine;
pub mod math;
pub mod validation;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::compute_indicators;
pub use validation::validate_series;
