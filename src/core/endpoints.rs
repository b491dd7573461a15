// src/core/endpoints.rs
//! Routes exposed by the resume analysis service

use std::fmt;

pub const ANALYZE_RESUME_ENDPOINT: &str = "/analyze_resume";
pub const ANALYZE_RESUME_AI_ENDPOINT: &str = "/analyze_resume_ai";
pub const UPLOAD_RESUME_AI_ENDPOINT: &str = "/upload_resume_ai";
pub const HELLO_ENDPOINT: &str = "/hello";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Keyword matching against the role's skill set
    RuleBased,
    /// LLM analysis of pasted text
    AiText,
    /// LLM analysis of an uploaded PDF/DOCX
    AiFile,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::RuleBased => ANALYZE_RESUME_ENDPOINT,
            Endpoint::AiText => ANALYZE_RESUME_AI_ENDPOINT,
            Endpoint::AiFile => UPLOAD_RESUME_AI_ENDPOINT,
        }
    }

    /// Whether an `error` field in a 2xx body fails the request.
    /// The rule-based route's body is always taken as a result.
    pub fn honors_embedded_error(&self) -> bool {
        !matches!(self, Endpoint::RuleBased)
    }

    pub fn accepts_file(&self) -> bool {
        matches!(self, Endpoint::AiFile)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
