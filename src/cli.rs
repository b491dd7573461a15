// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::core::ConfigManager;
use crate::render;
use crate::session::{AnalysisSessionController, SessionState};
use crate::types::TargetRole;
use crate::{connect, utils, ServiceClient};

#[derive(Parser, Debug)]
#[command(name = "resume-coach")]
#[command(about = "Send a resume to the analysis service and show the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Analysis service base URL (overrides config and RESUME_COACH_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to config YAML. If omitted, uses ./resume-coach.yaml if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds. No timeout by default.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Print the session state as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze pasted resume text (read from --text, --input or stdin)
    AnalyzeText {
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = TargetRole::default())]
        role: TargetRole,
        /// Use the AI analyzer instead of the rule-based one
        #[arg(long)]
        ai: bool,
    },
    /// Upload a PDF or DOCX resume for AI analysis
    AnalyzeFile {
        path: PathBuf,
        #[arg(long, default_value_t = TargetRole::default())]
        role: TargetRole,
    },
    /// List the target roles
    Roles,
    /// Check that the analysis service is reachable
    Ping,
}

impl Cli {
    pub fn load_config(&self) -> Result<ConfigManager> {
        Ok(ConfigManager::load(self.config.as_deref())?
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_secs))
    }
}

/// Run the command. Returns `false` when the analysis ended in error.
pub async fn handle_command(cli: &Cli, config: &ConfigManager) -> Result<bool> {
    match &cli.command {
        Command::Roles => {
            println!("{}", render::render_roles());
            Ok(true)
        }
        Command::Ping => {
            let client = ServiceClient::new(&config.service)?;
            let hello = client.hello().await?;
            println!("{}: {}", client.base_url(), hello.message);
            Ok(true)
        }
        Command::AnalyzeText {
            text,
            input,
            role,
            ai,
        } => {
            let controller = connect(&config.service)?;
            let text = resolve_text(text.as_deref(), input.as_deref()).await?;
            info!("Analyzing {} chars of text for {} (ai: {})", text.len(), role, ai);

            let _ = if *ai {
                controller.submit_text_ai(&text, *role).await
            } else {
                controller.submit_text_rule_based(&text, *role).await
            };
            finish(cli, &controller).await
        }
        Command::AnalyzeFile { path, role } => {
            let controller = connect(&config.service)?;
            // A missing path is the "no file selected" case, not a fatal error
            let file = if path.exists() {
                Some(utils::read_resume_file(path).await?)
            } else {
                None
            };
            info!("Uploading {} for {}", path.display(), role);

            let _ = controller.submit_file_ai(file, *role).await;
            finish(cli, &controller).await
        }
    }
}

async fn resolve_text(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = input {
        return utils::read_resume_text(path).await;
    }

    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read resume text from stdin")?;
    Ok(buffer)
}

async fn finish(cli: &Cli, controller: &AnalysisSessionController<ServiceClient>) -> Result<bool> {
    let state: SessionState = controller.state().await;
    if cli.json {
        println!("{}", render::render_json(&state)?);
    } else {
        println!("{}", render::render_state(&state));
    }
    Ok(!state.is_error())
}
