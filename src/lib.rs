pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
mod render;
pub mod telemetry;
