// src/render.rs
//! Terminal rendering of the analyzer result panel

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::session::{AnalysisStatus, SessionState};
use crate::types::{AnalysisResult, TargetRole};

pub const IDLE_PLACEHOLDER: &str =
    "The analysis results will appear here. Enter your resume and click a button to begin.";
pub const LOADING_PLACEHOLDER: &str = "AI is analyzing your resume... 🔍";
pub const NO_SKILLS_FOUND: &str = "No skills detected.";
pub const NO_SKILLS_MISSING: &str = "No missing or weak skills detected.";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

pub fn render_state(state: &SessionState) -> String {
    match (state.status(), state.result()) {
        (AnalysisStatus::Idle, _) => IDLE_PLACEHOLDER.to_string(),
        (AnalysisStatus::Loading, _) => LOADING_PLACEHOLDER.to_string(),
        (AnalysisStatus::Error, _) => format!("⚠ {}", state.error_message().unwrap_or_default()),
        (AnalysisStatus::Success, Some(result)) => render_result(result),
        (AnalysisStatus::Success, None) => String::new(),
    }
}

pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", result.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Score: {} / 100", result.score);

    render_tags(&mut out, "Detected Skills", &result.skills_found, NO_SKILLS_FOUND);
    render_tags(&mut out, "Missing / Weak Skills", &result.skills_missing, NO_SKILLS_MISSING);

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations");
    if result.recommendations.is_empty() {
        let _ = writeln!(out, "  {}", NO_RECOMMENDATIONS);
    } else {
        for (index, item) in result.recommendations.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, item);
        }
    }

    out
}

fn render_tags(out: &mut String, label: &str, tags: &[String], empty: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", label);
    if tags.is_empty() {
        let _ = writeln!(out, "  {}", empty);
    } else {
        let _ = writeln!(out, "  {}", tags.join(", "));
    }
}

pub fn render_json(state: &SessionState) -> Result<String> {
    serde_json::to_string_pretty(state).context("Failed to serialize session state")
}

pub fn render_roles() -> String {
    TargetRole::ALL
        .iter()
        .map(|role| format!("{:<22} {}", role.slug(), role.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}
