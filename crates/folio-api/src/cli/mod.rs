//! CLI command definitions for the `folio` binary.
//!
//! Uses clap derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Serve the portfolio site and its contact/chat endpoints.
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the SQLite store and config.toml
    /// (default: $FOLIO_DATA_DIR or ./DataBase).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as newline-delimited JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Directory with index.html and static/ (overrides config.toml).
        #[arg(long)]
        web_dir: Option<String>,
    },

    /// Create the database tables if they are missing, then exit.
    InitDb,
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` still wins.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["folio", "-v", "serve", "--port", "8080", "--host", "127.0.0.1"]);
        assert_eq!(cli.log_filter(), "debug");
        match cli.command {
            Commands::Serve { port, host, web_dir } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert!(web_dir.is_none());
            }
            Commands::InitDb => panic!("expected serve"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["folio", "init-db", "--data-dir", "/tmp/folio", "--json-logs"]);
        assert!(matches!(cli.command, Commands::InitDb));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/folio")));
        assert!(cli.json_logs);
        assert_eq!(cli.log_filter(), "info");
    }
}
