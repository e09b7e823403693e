//! Error types for the Ising engine.

use thiserror::Error;

/// Failures raised while constructing a lattice or driving a run.
///
/// Stepping and the observable estimators never fail once a [`Lattice`]
/// exists; every variant here comes from construction, configuration, or the
/// run loop's collaborators.
///
/// [`Lattice`]: crate::spins::Lattice
#[derive(Debug, Error)]
pub enum IsingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("run interrupted at epoch {epoch}")]
    Interrupted { epoch: usize },

    #[error("frame observer failed: {0}")]
    Observer(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, IsingError>;
