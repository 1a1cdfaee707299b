//! MCP tool server for National Weather Service alerts and forecasts.

pub mod client;
pub mod config;
pub mod constants;
pub mod formatters;
pub mod messages;
pub mod models;
pub mod operations;
pub mod service;

pub use client::{Fetch, FetchError, NwsClient};
pub use config::Config;
pub use messages::Language;
pub use service::Weather;
