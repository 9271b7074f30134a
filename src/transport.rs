//! Transport selector handed to the external server.
//!
//! The launcher always speaks over stdin/stdout; the enum exists so the
//! selector is a typed value rather than a bare string at the seam.

use std::fmt::{Display, Formatter};

/// How the external server exchanges messages with its caller.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TransportMode {
    /// Newline-delimited JSON-RPC over the process's stdin and stdout.
    #[default]
    Stdio,
}

impl TransportMode {
    /// Selector string understood by the external server.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
