#![warn(clippy::uninlined_format_args)]

pub mod config;
pub mod http_gateway;
pub mod telemetry;

pub use config::ApiConfig;
pub use http_gateway::HttpExpenseGateway;
pub use telemetry::init_logging;
