pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod signals;
