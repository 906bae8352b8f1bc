//! Error types for puzzle configuration and building.

use thiserror::Error;

pub type Result<T, E = BuildError> = std::result::Result<T, E>;

/// Problems with the command-line configuration, detected before any build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected an integer, got {0:?}")]
    InvalidLength(String),
}

/// Misuse of an `Engine`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Puzzle was already built; create a new engine for another build")]
    AlreadyBuilt,
}
