use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dtrack::{app, server};
use dtrack_core::config::Config;

#[derive(Parser)]
#[command(name = "dtrack", about = "DTDC shipment tracking")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/dtrack/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Audit log path, overriding `[audit] path`.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug-level diagnostics on stderr (RUST_LOG still wins).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a consignment and print the normalized record as JSON.
    Track { tracking_id: String },
    /// Print the most recently looked-up tracking numbers.
    Recent {
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Dump every readable audit log entry, oldest first.
    History,
    /// Serve the HTTP facade.
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.log_file {
        config.audit.path = path;
    }
    let tracker = app::build_tracker(&config)?;

    match cli.command {
        Command::Track { tracking_id } => match tracker.track_shipment(&tracking_id).await {
            Ok(info) => println!("{}", serde_json::to_string_pretty(&info)?),
            Err(failure) => {
                println!("{}", serde_json::to_string_pretty(&failure.info)?);
                return Err(failure.into());
            }
        },
        Command::Recent { limit } => {
            let limit = limit.unwrap_or(config.lookup.recent_limit);
            for id in tracker.recent_searches(limit) {
                println!("{id}");
            }
        }
        Command::History => {
            let entries = tracker.audit_log().entries()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(config.server.bind);
            let state = Arc::new(server::AppState {
                tracker,
                recent_limit: config.lookup.recent_limit,
            });
            let listener = tokio::net::TcpListener::bind(&bind).await?;
            tracing::info!(%bind, "http facade listening");
            axum::serve(listener, server::router(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
