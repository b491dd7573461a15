// src/error.rs
use thiserror::Error;

pub const MISSING_TEXT_MESSAGE: &str = "Please enter your resume text first.";
pub const MISSING_FILE_MESSAGE: &str = "Please select a PDF or DOCX resume file first.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Failure of a single analysis request. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Local input check failed; no request was sent
    #[error("{0}")]
    Validation(String),

    /// Service answered with a non-2xx status
    #[error("Server error (status: {status})")]
    Service { status: u16 },

    /// Request never produced a response
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose body carried an `error` field
    #[error("{0}")]
    ServiceReported(String),

    /// 2xx response whose body was not an analysis result
    #[error("{0}")]
    Decode(String),
}

impl AnalysisError {
    pub fn missing_text() -> Self {
        AnalysisError::Validation(MISSING_TEXT_MESSAGE.to_string())
    }

    pub fn missing_file() -> Self {
        AnalysisError::Validation(MISSING_FILE_MESSAGE.to_string())
    }

    /// The one string the presentation layer shows for this failure
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::Decode(err.to_string())
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AnalysisError::missing_text().user_message(),
            "Please enter your resume text first."
        );
        assert_eq!(
            AnalysisError::Service { status: 500 }.user_message(),
            "Server error (status: 500)"
        );
        assert_eq!(
            AnalysisError::Transport("Failed to fetch".into()).user_message(),
            "Failed to fetch"
        );
        assert_eq!(
            AnalysisError::ServiceReported("ignored".into()).user_message(),
            "ignored"
        );
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(
            AnalysisError::Transport(String::new()).user_message(),
            UNKNOWN_ERROR_MESSAGE
        );
        assert_eq!(
            AnalysisError::Decode("  ".into()).user_message(),
            UNKNOWN_ERROR_MESSAGE
        );
    }
}
