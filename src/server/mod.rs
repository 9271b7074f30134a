//! Capability contract between the launcher and an external MCP server.
//!
//! Resolution happens once at startup and yields a factory; the factory
//! builds a server with no arguments; the server consumes itself when run.

use std::future::Future;

use crate::transport::TransportMode;
use crate::Result;

pub mod process;

/// Locates an external server implementation.
pub trait ServerResolver {
    /// Factory produced when the implementation is available.
    type Factory: ServerFactory;

    /// Look up the implementation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DependencyMissing` when the implementation
    /// cannot be found.
    fn resolve(&self) -> Result<Self::Factory>;
}

/// Builds server instances with default configuration.
pub trait ServerFactory {
    /// Server handle produced by [`ServerFactory::construct`].
    type Server: McpServer;

    /// Construct one server. No parameters are threaded through.
    fn construct(&self) -> Self::Server;
}

/// A server that can be driven over a transport until it shuts down.
pub trait McpServer {
    /// Run the server's loop. Resolves when the server stops.
    fn run(self, transport: TransportMode) -> impl Future<Output = Result<()>> + Send;
}
