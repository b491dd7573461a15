// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::types::ResumeFile;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_CONTENT_TYPE: &str = "application/msword";
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// MIME type for an uploaded resume. Unknown formats are still sent;
/// the service decides whether it accepts them.
pub fn content_type_for(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => PDF_CONTENT_TYPE,
        Some("docx") => DOCX_CONTENT_TYPE,
        Some("doc") => DOC_CONTENT_TYPE,
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// Join a configured base URL and an endpoint path without doubling slashes
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Read a resume document from disk into an upload
pub async fn read_resume_file(path: &Path) -> Result<ResumeFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;

    Ok(ResumeFile::new(name, bytes))
}

/// Read pasted resume text from a file
pub async fn read_resume_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
