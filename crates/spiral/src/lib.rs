#![deny(clippy::all)]

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod presenter;
pub mod telemetry;

pub use app::Application;
pub use config::SpiralConfig;
pub use error::CliError;
pub use handlers::HandlerResult;
