//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while drawing or encoding a contour map.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The requested surface cannot be allocated.
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] std::io::Error),
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
