//! Launcher configuration parsing and validation.
//!
//! Every field has a default, so running without a config file is the
//! normal case. A TOML file passed with `--config` overrides the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{AppError, Result};

fn default_package() -> String {
    "mqtt-mcp".into()
}

fn default_transport_flag() -> String {
    "--transport".into()
}

fn default_install_hint() -> String {
    "uv pip install mqtt-mcp".into()
}

/// Where to find the external server and how to invoke it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ServerConfig {
    /// Package name; used in diagnostics and as the executable name to look up.
    #[serde(default = "default_package")]
    pub package: String,
    /// Explicit executable. When unset, `package` is searched on `PATH`.
    #[serde(default)]
    pub command: Option<PathBuf>,
    /// Extra arguments placed before the transport flag. Empty by default,
    /// so the server is constructed with no parameters unless an operator
    /// opts in here.
    #[serde(default)]
    pub args: Vec<String>,
    /// Flag that carries the transport selector; empty disables it.
    #[serde(default = "default_transport_flag")]
    pub transport_flag: String,
    /// Install remedy printed when the server cannot be found.
    #[serde(default = "default_install_hint")]
    pub install_hint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            command: None,
            args: Vec::new(),
            transport_flag: default_transport_flag(),
            install_hint: default_install_hint(),
        }
    }
}

impl ServerConfig {
    /// Name the resolver searches for: the explicit command, else the package.
    #[must_use]
    pub fn program(&self) -> PathBuf {
        self.command
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.package))
    }
}

/// Top-level configuration parsed from an optional TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct LauncherConfig {
    /// External server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl LauncherConfig {
    /// Load the file at `path`, or fall back to defaults when `None`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read, is not valid
    /// TOML, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let server = &self.server;

        if server.package.trim().is_empty() {
            return Err(AppError::Config("server.package must not be empty".into()));
        }

        if server.install_hint.trim().is_empty() {
            return Err(AppError::Config(
                "server.install_hint must not be empty".into(),
            ));
        }

        if server
            .command
            .as_ref()
            .is_some_and(|cmd| cmd.as_os_str().is_empty())
        {
            return Err(AppError::Config("server.command must not be empty".into()));
        }

        if server.args.iter().any(String::is_empty) {
            return Err(AppError::Config(
                "server.args must not contain empty strings".into(),
            ));
        }

        Ok(())
    }
}
