//! Error type for the CLI runner.

use rollcall_core::{ConfigError, ElectionError, SessionError};

/// Errors that can occur while running the simulation from the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// The legislature could not be elected.
    #[error("election error: {source}")]
    Election {
        /// The underlying election error.
        #[from]
        source: ElectionError,
    },

    /// A session failed to run.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: SessionError,
    },
}
