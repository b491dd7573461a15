// src/types/analysis.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role the resume is evaluated against. Serialized as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetRole {
    #[default]
    #[serde(rename = "Software Developer")]
    SoftwareDeveloper,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[serde(rename = "Marketing Specialist")]
    MarketingSpecialist,
    #[serde(rename = "Customer Service")]
    CustomerService,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Other")]
    Other,
}

impl TargetRole {
    pub const ALL: [TargetRole; 9] = [
        TargetRole::SoftwareDeveloper,
        TargetRole::FrontendDeveloper,
        TargetRole::BackendDeveloper,
        TargetRole::DataAnalyst,
        TargetRole::UiUxDesigner,
        TargetRole::MarketingSpecialist,
        TargetRole::CustomerService,
        TargetRole::ProjectManager,
        TargetRole::Other,
    ];

    /// Value sent to the analysis service
    pub fn label(&self) -> &'static str {
        match self {
            TargetRole::SoftwareDeveloper => "Software Developer",
            TargetRole::FrontendDeveloper => "Frontend Developer",
            TargetRole::BackendDeveloper => "Backend Developer",
            TargetRole::DataAnalyst => "Data Analyst",
            TargetRole::UiUxDesigner => "UI/UX Designer",
            TargetRole::MarketingSpecialist => "Marketing Specialist",
            TargetRole::CustomerService => "Customer Service",
            TargetRole::ProjectManager => "Project Manager",
            TargetRole::Other => "Other",
        }
    }

    /// Label shown in role pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetRole::Other => "Other / General",
            other => other.label(),
        }
    }

    /// Kebab-case form accepted on the command line
    pub fn slug(&self) -> String {
        self.label()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect()
    }
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown target role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for TargetRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TargetRole::ALL
            .into_iter()
            .find(|role| {
                role.label().eq_ignore_ascii_case(wanted)
                    || role.display_name().eq_ignore_ascii_case(wanted)
                    || role.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// Structured analysis returned by every analysis endpoint.
///
/// The rule-based endpoint omits `recommendations`, so all list fields
/// default to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills_found: Vec<String>,
    #[serde(default)]
    pub skills_missing: Vec<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl AnalysisResult {
    /// Service-reported failure carried in a 2xx body, if any
    pub fn embedded_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
