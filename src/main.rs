#![forbid(unsafe_code)]

//! `mqtt-mcp-stdio` — runs the `mqtt-mcp` server over stdin/stdout.
//!
//! Resolves the external server, then hands it this process's stdio for the
//! lifetime of the session. stdout carries the protocol, so all logging goes
//! to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mqtt_mcp_stdio::errors::EXIT_FAILURE;
use mqtt_mcp_stdio::launcher::Launcher;
use mqtt_mcp_stdio::server::process::ProcessResolver;
use mqtt_mcp_stdio::{AppError, LauncherConfig, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mqtt-mcp-stdio", about = "Run mqtt-mcp over the stdio MCP transport", version, long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(err) = init_tracing(args.log_format) {
        eprintln!("Error: {err}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let config = match LauncherConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };
    info!(package = %config.server.package, "mqtt-mcp-stdio bootstrap");

    let launcher = Launcher::new(ProcessResolver::from_config(&config.server));
    ExitCode::from(launcher.launch(&mut std::io::stderr()))
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
