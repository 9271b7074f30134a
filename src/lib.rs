#![forbid(unsafe_code)]

//! Launcher that runs the `mqtt-mcp` server over the stdio MCP transport.

pub mod config;
pub mod errors;
pub mod launcher;
pub mod server;
pub mod transport;

pub use config::LauncherConfig;
pub use errors::{AppError, Result};
