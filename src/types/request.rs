// src/types/request.rs
use serde::Serialize;

use super::TargetRole;
use crate::utils;

/// Resume document picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn content_type(&self) -> &'static str {
        utils::content_type_for(&self.name)
    }
}

/// What a single submission analyzes. Pasted text and uploaded files are
/// never merged into one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text(String),
    File(ResumeFile),
}

impl AnalysisInput {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisInput::Text(_) => "text",
            AnalysisInput::File(_) => "file",
        }
    }
}

/// JSON body of the text analysis endpoints
#[derive(Debug, Serialize)]
pub struct TextAnalysisRequest<'a> {
    pub text: &'a str,
    pub target_role: TargetRole,
}
