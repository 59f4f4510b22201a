pub mod http;
pub mod scheduler;
