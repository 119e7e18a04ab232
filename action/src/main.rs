//! Auto-assign action
//!
//! Assigns users to the issue or pull request that triggered a workflow,
//! picking them from explicit (optionally weighted) lists and team membership.
//! Uses hexagonal (ports & adapters) architecture so the pipeline can be
//! tested against an in-memory GitHub.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;



use adapters::GitHubClientImpl;
use app::{parse_request, AssignService};
use config::Config;
use domain::entities::DispatchOutcome;

async fn run() -> Result<DispatchOutcome> {
    let config = Config::from_env().context("Failed to load configuration")?;
    let request = parse_request(&config.inputs)?;
    let payload = config.read_event_payload()?;

    let client = Arc::new(
        GitHubClientImpl::new(&config.api_url, &config.repo_token)
            .context("Failed to create GitHub client")?,
    );
    let service = AssignService::new(client.clone(), client);

    let outcome = service
        .run(&payload, &request, &mut rand::thread_rng())
        .await?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (stdout is reserved for workflow commands)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,auto_assign=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting auto-assign action...");

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Assignment failed: {:#}", e);
            // Workflow command: marks the step as failed in the run summary
            println!("::error::{}", escape_workflow_data(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Escape a message for use as workflow command data
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
