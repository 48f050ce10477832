mod terminal;

use std::{io::Read, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::HttpTalentMatcher;
use page_controller::{load_settings, PageController, UiState};
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalPorts;

/// Runs the landing page's match flow from a terminal against a live endpoint.
#[derive(Parser, Debug)]
struct Args {
    /// Project description; read from stdin when omitted.
    #[arg(long)]
    description: Option<String>,
    /// Page language code ("en" or "ar").
    #[arg(long, default_value = "en")]
    lang: String,
    /// Origin the endpoint path is resolved against.
    #[arg(long)]
    base_url: Option<String>,
    /// Endpoint path or absolute URL.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = Some(base_url);
    }
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }
    let endpoint = settings
        .endpoint_url()
        .context("failed to resolve matching endpoint (pass --base-url)")?;
    tracing::info!(%endpoint, "using matching endpoint");

    let description = match args.description {
        Some(description) => description,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read description from stdin")?;
            buf
        }
    };

    let matcher = HttpTalentMatcher::new(endpoint);
    let mut page = PageController::new(TerminalPorts::new(description), settings.messages);
    page.select_language(&args.lang);
    page.ports().print_header();

    if page.submit(&matcher).await.is_err() {
        return Ok(ExitCode::from(2));
    }

    Ok(match page.state() {
        UiState::ErrorShown { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
