//! Error taxonomy for the Lamague engines.
//!
//! One enum per subsystem, wrapped by [`LamagueError`] so callers can
//! propagate any of them with `?`.

mod config_error;
mod consensus_error;
mod ledger_error;
mod numeric_error;
mod pyramid_error;

pub use config_error::ConfigError;
pub use consensus_error::ConsensusError;
pub use ledger_error::LedgerError;
pub use numeric_error::NumericError;
pub use pyramid_error::PyramidError;

/// Top-level error for every fallible Lamague operation.
#[derive(Debug, thiserror::Error)]
pub enum LamagueError {
    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),

    #[error("pyramid error: {0}")]
    Pyramid(#[from] PyramidError),

    #[error("consensus error: {0}")]
    Consensus(#[from] ConsensusError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl LamagueError {
    /// True for invariant breaches that must abort the surrounding operation.
    ///
    /// Everything else is a recoverable precondition failure: the caller may
    /// retry after adding agents, blocks, or fixing its input vectors.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LamagueError::Pyramid(PyramidError::EntropyNotReduced { .. })
        )
    }
}

impl From<serde_json::Error> for LamagueError {
    fn from(err: serde_json::Error) -> Self {
        LamagueError::SerializationError(err.to_string())
    }
}

/// Convenience alias used across the workspace.
pub type LamagueResult<T> = Result<T, LamagueError>;
