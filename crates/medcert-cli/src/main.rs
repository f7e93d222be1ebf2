use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use medcert_application::SessionDispatcher;
use medcert_core::event::{Command, InboundEvent};
use medcert_infrastructure::{CertificateTemplate, TemplateFiller};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod config;
mod console;

#[derive(Parser)]
#[command(name = "medcert")]
#[command(about = "Guided medical certificate generator", long_about = None)]
struct Cli {
    /// Path to the certificate template PDF
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory generated certificates are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Optional TOML config file; flags take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::default(),
    };

    let template_path = cli
        .template
        .or(config.template)
        .context("no template path; pass --template or set `template` in the config file")?;
    let output_dir = cli
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("certificates"));

    // A process without a template cannot serve anyone; fail before
    // accepting input.
    let template = CertificateTemplate::load(&template_path)
        .with_context(|| format!("load certificate template {}", template_path.display()))?;
    tracing::info!(template = %template_path.display(), "certificate template loaded");

    let dispatcher = SessionDispatcher::new(
        Arc::new(TemplateFiller::new(template)),
        Arc::new(console::ConsoleMessenger::new(output_dir)),
    );

    let participant = "console";
    dispatcher
        .dispatch(participant, InboundEvent::command(Command::Start))
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = match line {
            "/start" => InboundEvent::command(Command::Start),
            "/cancel" => InboundEvent::command(Command::Cancel),
            "/quit" | "/exit" => break,
            text => InboundEvent::text(text),
        };
        if let Err(e) = dispatcher.dispatch(participant, event).await {
            tracing::error!(error = %e, "event dispatch failed");
        }
    }

    Ok(())
}
