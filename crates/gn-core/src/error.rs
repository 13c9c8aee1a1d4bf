//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap foreign errors with
//! `#[from]`; `NavError` covers configuration and the shared primitives.

use thiserror::Error;

/// The top-level error type for `gn-core`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Shorthand result type for `gn-core`.
pub type NavResult<T> = Result<T, NavError>;
