// src/session/controller.rs
//! Request orchestration behind the resume analyzer view

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::state::SessionState;
use crate::core::{AnalysisService, Endpoint};
use crate::error::AnalysisError;
use crate::types::{AnalysisInput, AnalysisResult, ResumeFile, TargetRole};

/// The three buttons of the analyzer view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisAction {
    RuleBasedText,
    AiText,
    AiFile,
}

impl AnalysisAction {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            AnalysisAction::RuleBasedText => Endpoint::RuleBased,
            AnalysisAction::AiText => Endpoint::AiText,
            AnalysisAction::AiFile => Endpoint::AiFile,
        }
    }
}

#[derive(Debug, Default)]
struct Draft {
    text: String,
    file: Option<ResumeFile>,
    role: TargetRole,
}

/// Map a decoded body onto success or failure. With `honor_embedded_error`
/// a non-empty `error` field fails the request despite the 2xx status.
pub fn interpret_response(
    result: AnalysisResult,
    honor_embedded_error: bool,
) -> Result<AnalysisResult, AnalysisError> {
    if honor_embedded_error {
        if let Some(message) = result.embedded_error() {
            return Err(AnalysisError::ServiceReported(message.to_string()));
        }
    }
    Ok(result)
}

pub struct AnalysisSessionController<S> {
    service: S,
    state: Mutex<SessionState>,
    draft: Mutex<Draft>,
    generation: AtomicU64,
}

impl<S: AnalysisService> AnalysisSessionController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(SessionState::idle()),
            draft: Mutex::new(Draft::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the current view state
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Sequence number of the most recent submission
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn set_text(&self, text: impl Into<String>) {
        self.draft.lock().await.text = text.into();
    }

    pub async fn set_file(&self, file: ResumeFile) {
        self.draft.lock().await.file = Some(file);
    }

    pub async fn clear_file(&self) {
        self.draft.lock().await.file = None;
    }

    pub async fn set_target_role(&self, role: TargetRole) {
        self.draft.lock().await.role = role;
    }

    pub async fn target_role(&self) -> TargetRole {
        self.draft.lock().await.role
    }

    /// Run `action` against whatever the draft currently holds
    pub async fn submit(&self, action: AnalysisAction) -> Result<AnalysisResult, AnalysisError> {
        let (text, file, role) = {
            let draft = self.draft.lock().await;
            match action {
                AnalysisAction::AiFile => (String::new(), draft.file.clone(), draft.role),
                _ => (draft.text.clone(), None, draft.role),
            }
        };

        match action {
            AnalysisAction::RuleBasedText => self.submit_text_rule_based(&text, role).await,
            AnalysisAction::AiText => self.submit_text_ai(&text, role).await,
            AnalysisAction::AiFile => self.submit_file_ai(file, role).await,
        }
    }

    pub async fn submit_text_rule_based(
        &self,
        text: &str,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.run(Endpoint::RuleBased, text_input(text), role).await
    }

    pub async fn submit_text_ai(
        &self,
        text: &str,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.run(Endpoint::AiText, text_input(text), role).await
    }

    pub async fn submit_file_ai(
        &self,
        file: Option<ResumeFile>,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError> {
        let input = file
            .map(AnalysisInput::File)
            .ok_or_else(AnalysisError::missing_file);
        self.run(Endpoint::AiFile, input, role).await
    }

    async fn run(
        &self,
        endpoint: Endpoint,
        input: Result<AnalysisInput, AnalysisError>,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let input = match input {
            Ok(input) => input,
            Err(err) => {
                debug!("Submission #{} to {} rejected locally: {}", ticket, endpoint, err);
                self.apply(ticket, SessionState::failed(err.user_message()))
                    .await;
                return Err(err);
            }
        };

        self.apply(ticket, SessionState::loading()).await;

        let outcome = self
            .service
            .analyze(endpoint, &input, role)
            .await
            .and_then(|result| interpret_response(result, endpoint.honors_embedded_error()));

        let next = match &outcome {
            Ok(result) => SessionState::success(result.clone()),
            Err(err) => {
                error!("Submission #{} to {} failed: {}", ticket, endpoint, err);
                SessionState::failed(err.user_message())
            }
        };
        self.apply(ticket, next).await;

        outcome
    }

    /// Write `next` only if no newer submission has started since `ticket`
    async fn apply(&self, ticket: u64, next: SessionState) {
        let mut state = self.state.lock().await;
        let latest = self.generation.load(Ordering::SeqCst);
        if ticket != latest {
            warn!(
                "Discarding stale {} from submission #{} (latest is #{})",
                next.status(),
                ticket,
                latest
            );
            return;
        }
        debug!("Session #{}: {} -> {}", ticket, state.status(), next.status());
        *state = next;
    }
}

fn text_input(text: &str) -> Result<AnalysisInput, AnalysisError> {
    if text.trim().is_empty() {
        Err(AnalysisError::missing_text())
    } else {
        Ok(AnalysisInput::Text(text.to_string()))
    }
}
