// src/session/state.rs
use serde::Serialize;
use std::fmt;

use crate::types::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisStatus::Idle => "idle",
            AnalysisStatus::Loading => "loading",
            AnalysisStatus::Success => "success",
            AnalysisStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// What the presentation layer renders.
///
/// `result` is only set in `Success` and `error_message` only in `Error`;
/// the constructors are the only way to build a state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionState {
    status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            status: AnalysisStatus::Loading,
            ..Self::default()
        }
    }

    pub fn success(result: AnalysisResult) -> Self {
        Self {
            status: AnalysisStatus::Success,
            result: Some(result),
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: AnalysisStatus::Error,
            result: None,
            error_message: Some(message.into()),
        }
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.status == AnalysisStatus::Error
    }
}
