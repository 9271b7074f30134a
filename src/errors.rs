//! Error types shared across the launcher.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Exit status for a clean server shutdown.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for every launcher failure, including a missing dependency.
pub const EXIT_FAILURE: u8 = 1;

/// Application error enumeration covering all launcher failure modes.
#[derive(Debug)]
pub enum AppError {
    /// The external server implementation could not be located at startup.
    DependencyMissing {
        /// Package or executable name that was looked up.
        package: String,
        /// Command the operator should run to install it.
        install_hint: String,
    },
    /// Configuration parsing or validation failure.
    Config(String),
    /// File-system, runtime or process-spawn failure.
    Io(String),
    /// The external server's run loop ended unsuccessfully.
    Server(String),
}

impl AppError {
    /// Process exit status reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DependencyMissing { .. } | Self::Config(_) | Self::Io(_) | Self::Server(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DependencyMissing {
                package,
                install_hint,
            } => write!(f, "{package} not found. Install with: {install_hint}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
            Self::Server(msg) => write!(f, "server: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
