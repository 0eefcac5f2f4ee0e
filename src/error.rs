//! Error types for tree construction and insertion.

use thiserror::Error;

/// Errors reported by [`Quadtree`](crate::Quadtree) operations.
///
/// Queries never fail; only construction and insertion can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadtreeError {
    /// A construction parameter is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The position lies outside the bounds of the tree
    #[error("Position ({x}, {y}) is outside the bounds of the tree")]
    OutOfBounds {
        /// Rejected X coordinate
        x: f64,
        /// Rejected Y coordinate
        y: f64,
    },
}

/// Result alias used throughout the crate
pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
