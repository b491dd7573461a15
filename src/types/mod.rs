// src/types/mod.rs
pub mod analysis;
pub mod request;
pub mod response;

pub use analysis::{AnalysisResult, ParseRoleError, TargetRole};
pub use request::{AnalysisInput, ResumeFile, TextAnalysisRequest};
pub use response::HelloResponse;
