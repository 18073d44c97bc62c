//! Error type for reveal configuration and resources.
//!
//! Reveal operations themselves are total. Only a bad configuration, a
//! failed thread spawn or a failed terminal write can go wrong.

use std::io;
use thiserror::Error;

/// Errors produced by the reveal engine.
#[derive(Debug, Error)]
pub enum RevealError {
    /// The step size must reveal at least one character per tick.
    #[error("reveal step must be at least 1 character per tick")]
    InvalidStep,

    /// The tick interval must be non-zero.
    #[error("reveal interval must be greater than zero")]
    InvalidInterval,

    /// The timer thread could not be started.
    #[error("failed to spawn reveal timer: {0}")]
    Timer(#[source] io::Error),

    /// Writing rendered output failed.
    #[error("terminal output failed: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, RevealError>;
