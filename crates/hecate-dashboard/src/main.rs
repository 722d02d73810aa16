/*
[INPUT]:  CLI arguments, YAML configuration file, HECATE__* env vars, OS shutdown signals
[OUTPUT]: Interactive dashboard, config check, or generated config file
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

mod cli;
mod tui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use hecate_client::{Credentials, HecateClient};
use hecate_dashboard::config::{DashboardConfig, default_config_path};
use hecate_dashboard::logging::{
    LOG_BUFFER_CAPACITY, LogBuffer, init_stderr_tracing, init_tui_tracing,
};
use hecate_dashboard::{HttpTaskCreator, TaskCreator};

#[derive(Parser, Debug)]
#[command(name = "hecate-dashboard", version, about = "Hecate task and cluster dashboard")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the terminal dashboard (default)
    Run,
    /// Load and validate the configuration, then exit
    Check,
    /// Write a configuration file interactively
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run(args.config_path.as_deref(), &args.log_level).await,
        Command::Check => {
            init_stderr_tracing(&args.log_level)?;
            check(args.config_path.as_deref())
        }
        Command::Init { force } => {
            init_stderr_tracing(&args.log_level)?;
            let output = match args.config_path {
                Some(path) => path,
                None => default_config_path().context("no config directory on this platform")?,
            };
            cli::init::run_init(output, force)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let config = DashboardConfig::load(path).context("load config")?;
    config.validate().context("validate config")?;
    Ok(config)
}

fn check(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    info!(
        base_url = %config.api.base_url,
        clusters = config.clusters.len(),
        form_variant = ?config.ui.form_variant,
        "configuration valid"
    );
    Ok(())
}

fn build_client(config: &DashboardConfig) -> Result<HecateClient> {
    let mut client =
        HecateClient::with_config(config.client_config()).context("create task API client")?;
    if let Some(token) = config.api.token.as_ref().filter(|token| !token.is_empty()) {
        client.set_credentials(Credentials {
            api_token: token.clone(),
        });
    }
    Ok(client)
}

async fn run(config_path: Option<&Path>, log_level: &str) -> Result<()> {
    let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
    let config = load_config(config_path)?;
    let _log_guard = init_tui_tracing(log_level, log_buffer.clone(), config.log_dir.as_deref())?;

    info!(
        base_url = %config.api.base_url,
        clusters = config.clusters.len(),
        "starting hecate-dashboard"
    );

    let client = build_client(&config)?;
    let creator: Arc<dyn TaskCreator> = Arc::new(HttpTaskCreator::new(client.clone()));

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    tui::run_tui(config, client, creator, log_buffer, shutdown)
        .await
        .context("run dashboard")?;
    info!("dashboard exited");
    Ok(())
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown_clone.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
