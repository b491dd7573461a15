pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod session;
pub mod types;
pub mod utils;

pub use crate::core::{ConfigManager, Endpoint, ServiceClient, ServiceConfig};
pub use crate::error::AnalysisError;
pub use crate::session::{AnalysisAction, AnalysisSessionController, AnalysisStatus, SessionState};
pub use crate::types::{AnalysisInput, AnalysisResult, ResumeFile, TargetRole};

use anyhow::Result;

/// Controller wired to the HTTP service described by `config`
pub fn connect(config: &ServiceConfig) -> Result<AnalysisSessionController<ServiceClient>> {
    let client = ServiceClient::new(config)?;
    Ok(AnalysisSessionController::new(client))
}
