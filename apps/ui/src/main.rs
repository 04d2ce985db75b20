mod app;
mod client;
mod config;
mod errors;
mod render;
mod state;
mod ui;

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;
use crate::client::MatchClient;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    info!("Starting matcher-ui v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", config.api_base_url);

    let client = Arc::new(MatchClient::new(
        &config.api_base_url,
        Duration::from_secs(config.timeout_secs),
    ));

    let (tx, rx) = mpsc::unbounded_channel();
    app::spawn_input_thread(tx.clone());

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = App::new(client, tx).run(&mut terminal, rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Structured logging to a file — the TUI owns the terminal, so nothing may
/// write to stdout/stderr while it runs.
fn init_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(&config.log_file)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    Ok(())
}
