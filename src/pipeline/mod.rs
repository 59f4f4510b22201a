//! Analysis pipeline: context wiring and the run-once orchestrator.

pub mod context;
pub mod runner;

pub use context::PipelineContext;
pub use runner::Analyzer;
