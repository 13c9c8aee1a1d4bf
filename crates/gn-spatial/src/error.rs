//! Spatial-subsystem error type.

use thiserror::Error;

use gn_core::NodeId;

/// Errors produced by `gn-spatial`.
///
/// "No route" is deliberately absent: searches report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("node {0} does not belong to the grid")]
    NodeNotFound(NodeId),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
