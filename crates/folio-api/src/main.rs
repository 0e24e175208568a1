//! Folio web server entry point.
//!
//! Binary name: `folio`
//!
//! Parses CLI arguments, sets up tracing, loads the site configuration, opens
//! the store (creating its tables), then starts the HTTP server or exits
//! after initialization.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;
use folio_infra::config::load_site_config;
use folio_infra::filesystem::resolve_data_dir;
use folio_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
use folio_types::config::SiteConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingOptions {
        default_filter: cli.log_filter().to_string(),
        json: cli.json_logs,
        otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let data_dir = cli.data_dir.clone().unwrap_or_else(resolve_data_dir);
    let config = load_site_config(&data_dir).await;

    let result = run(cli.command, data_dir, config).await;
    if let Err(e) = &result {
        tracing::error!(error = ?e, "Folio exited with an error");
    }

    shutdown_tracing();
    result
}

async fn run(command: Commands, data_dir: PathBuf, mut config: SiteConfig) -> anyhow::Result<()> {
    match command {
        Commands::InitDb => {
            let state = AppState::init(data_dir, config).await?;
            println!(
                "  {} Tables ready in {}",
                console::style("✓").green(),
                console::style(state.data_dir.join(&state.config.database_file).display()).cyan()
            );
        }

        Commands::Serve {
            port,
            host,
            web_dir,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(web_dir) = web_dir {
                config.web_dir = web_dir;
            }

            // Store creation failures abort startup here.
            let state = AppState::init(data_dir, config).await?;

            let addr = state.config.bind_address();
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Folio listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
