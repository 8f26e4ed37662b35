// dnboard - terminal companion for the Discover New site
//
// Previews the site's hero typewriter animation and manages the local
// comment blob the site keeps under its fixed storage key.
//
// Architecture:
// - Typewriter (typewriter): self-rescheduling animation state machine
// - Comment board (board): validation, JSON blob persistence, HTML markup
// - TUI (ratatui): hero banner, comment list, submission form
// - CLI (clap): scripted access to the blob and config management

mod board;
mod cli;
mod config;
mod logging;
mod tui;
mod typewriter;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (comments ..., config ...)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Capture logs to an in-memory buffer for the TUI's logs panel; logs
    // written straight to stdout would garble the alternate screen
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("dnboard={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional file logging (non-blocking writer, daily rotation). The
    // guard must stay alive for the duration of the program so logs flush.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let file_appender =
                    tracing_appender::rolling::daily(&config.logging.file_dir, "dnboard.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            }
        }
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        None
    };

    tracing::info!(
        "Starting dnboard (data dir: {})",
        config.data_dir.display()
    );

    // Run the TUI in the main task; blocks until the user quits
    if let Err(e) = tui::run_tui(config, log_buffer).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
