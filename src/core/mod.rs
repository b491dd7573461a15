// src/core/mod.rs
//! Service plumbing shared by the session controller and the CLI

pub mod config_manager;
pub mod endpoints;
pub mod service_client;

pub use config_manager::{ConfigManager, LoggingConfig, ServiceConfig};
pub use endpoints::Endpoint;
pub use service_client::{AnalysisService, ServiceClient};
