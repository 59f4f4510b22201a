//! Error taxonomy for the signal pipeline.

use thiserror::Error;

/// Errors surfaced by the indicator engine and evaluators.
///
/// Short-but-valid series are not errors: evaluators translate them into a
/// Neutral/0 vote. `UpstreamUnavailable` and `InvalidInput` cause the
/// affected evaluator to be skipped for the run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
