// src/session/mod.rs
pub mod controller;
pub mod state;

pub use controller::{interpret_response, AnalysisAction, AnalysisSessionController};
pub use state::{AnalysisStatus, SessionState};
