//! External server backed by a child process.
//!
//! The `mqtt-mcp` executable is located on `PATH` (or at an explicit path
//! from configuration) and spawned with the launcher's own stdin, stdout and
//! stderr so the MCP client talks to it directly. The child inherits the full
//! environment and is killed if its handle is dropped.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::{McpServer, ServerFactory, ServerResolver};
use crate::config::ServerConfig;
use crate::transport::TransportMode;
use crate::{AppError, Result};

/// Resolves the external server executable.
#[derive(Debug, Clone)]
pub struct ProcessResolver {
    config: ServerConfig,
    search_path: Option<OsString>,
}

impl ProcessResolver {
    /// Resolver for the server described by `config`, searching the process `PATH`.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            config: config.clone(),
            search_path: None,
        }
    }

    /// Search `paths` (in `PATH` syntax) instead of the process `PATH`.
    #[must_use]
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    fn locate(&self, program: &Path) -> which::Result<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(program, Some(paths), cwd)
            }
            None => which::which(program),
        }
    }
}

impl ServerResolver for ProcessResolver {
    type Factory = ProcessServerFactory;

    fn resolve(&self) -> Result<ProcessServerFactory> {
        let program = self.config.program();

        match self.locate(&program) {
            Ok(resolved) => {
                info!(
                    package = %self.config.package,
                    program = %resolved.display(),
                    "external server resolved"
                );
                Ok(ProcessServerFactory {
                    program: resolved,
                    args: self.config.args.clone(),
                    transport_flag: self.config.transport_flag.clone(),
                })
            }
            Err(err) => {
                debug!(
                    package = %self.config.package,
                    program = %program.display(),
                    %err,
                    "external server lookup failed"
                );
                Err(AppError::DependencyMissing {
                    package: self.config.package.clone(),
                    install_hint: self.config.install_hint.clone(),
                })
            }
        }
    }
}

/// Produces [`ProcessServer`] handles for a resolved executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessServerFactory {
    program: PathBuf,
    args: Vec<String>,
    transport_flag: String,
}

impl ProcessServerFactory {
    /// Absolute path of the resolved executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ServerFactory for ProcessServerFactory {
    type Server = ProcessServer;

    fn construct(&self) -> ProcessServer {
        ProcessServer {
            program: self.program.clone(),
            args: self.args.clone(),
            transport_flag: self.transport_flag.clone(),
        }
    }
}

/// Handle to one external server run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessServer {
    program: PathBuf,
    args: Vec<String>,
    transport_flag: String,
}

impl ProcessServer {
    /// Arguments passed to the executable for `transport`.
    #[must_use]
    pub fn command_line(&self, transport: TransportMode) -> Vec<String> {
        let mut args = self.args.clone();
        if !self.transport_flag.is_empty() {
            args.push(self.transport_flag.clone());
            args.push(transport.as_str().to_owned());
        }
        args
    }
}

impl McpServer for ProcessServer {
    async fn run(self, transport: TransportMode) -> Result<()> {
        let args = self.command_line(transport);
        let program = self.program.display().to_string();

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|err| AppError::Io(format!("failed to spawn {program}: {err}")))?;

        info!(%program, ?args, pid = ?child.id(), %transport, "external server started");

        let status = child
            .wait()
            .await
            .map_err(|err| AppError::Io(format!("failed to wait for {program}: {err}")))?;

        if status.success() {
            info!(%program, "external server exited cleanly");
            return Ok(());
        }

        let reason = status.code().map_or_else(
            || format!("{program} terminated by signal"),
            |code| format!("{program} exited with code {code}"),
        );
        warn!(%program, %reason, "external server failed");
        Err(AppError::Server(reason))
    }
}
