//! Process launcher: resolve the external server, construct it, run it.
//!
//! The launcher owns exactly one server handle for the life of the process
//! and drives it on a current-thread tokio runtime. Failures are reported
//! once, as a single diagnostic line, and turned into an exit status.

use std::io::Write;

use tracing::{debug, error, info, warn};

use crate::errors::EXIT_SUCCESS;
use crate::server::{McpServer, ServerFactory, ServerResolver};
use crate::transport::TransportMode;
use crate::{AppError, Result};

/// Transport every launched server runs over.
pub const TRANSPORT: TransportMode = TransportMode::Stdio;

/// Entry point that bootstraps one external server over [`TRANSPORT`].
#[derive(Debug)]
pub struct Launcher<R> {
    resolver: R,
}

impl<R: ServerResolver> Launcher<R> {
    /// Launcher that will obtain its server from `resolver`.
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Locate the external server implementation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DependencyMissing` if it is not available.
    pub fn resolve_dependency(&self) -> Result<R::Factory> {
        debug!("resolving external server");
        self.resolver.resolve()
    }

    /// Resolve, run to completion, and map the outcome to an exit status.
    ///
    /// On failure a single `Error: ...` line is written to `diagnostics`.
    /// Must not be called from inside a tokio runtime.
    pub fn launch(&self, diagnostics: &mut impl Write) -> u8 {
        match self.try_launch() {
            Ok(()) => {
                info!("external server shut down");
                EXIT_SUCCESS
            }
            Err(err) => {
                report(diagnostics, &err);
                err.exit_code()
            }
        }
    }

    fn try_launch(&self) -> Result<()> {
        let factory = self.resolve_dependency()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| AppError::Io(format!("failed to build tokio runtime: {err}")))?;

        runtime.block_on(run(&factory, TRANSPORT))
    }
}

/// Construct one server from `factory` and drive it over `transport`.
///
/// Returns when the server's loop ends or the process receives a
/// termination signal; in the latter case the server handle is dropped.
///
/// # Errors
///
/// Propagates whatever error the server's run loop reports.
pub async fn run<F: ServerFactory>(factory: &F, transport: TransportMode) -> Result<()> {
    let server = factory.construct();
    info!(%transport, "starting external server");

    tokio::select! {
        result = server.run(transport) => result,
        () = shutdown_signal() => {
            info!("shutdown signal received");
            Ok(())
        }
    }
}

fn report(diagnostics: &mut impl Write, err: &AppError) {
    debug!(%err, "launcher failed");
    if let Err(write_err) = writeln!(diagnostics, "Error: {err}") {
        error!(%write_err, %err, "failed to write diagnostic");
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                wait_ctrl_c(ctrl_c).await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        wait_ctrl_c(ctrl_c).await;
    }
}

async fn wait_ctrl_c(ctrl_c: impl std::future::Future<Output = std::io::Result<()>>) {
    if let Err(err) = ctrl_c.await {
        error!(%err, "ctrl-c signal handler failed");
        std::future::pending::<()>().await;
    }
}
