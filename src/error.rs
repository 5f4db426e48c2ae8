//! Error types for the quad-tree.

use thiserror::Error;

/// Errors raised while building or configuring a [`QuadTree`](crate::QuadTree).
#[derive(Debug, Error)]
pub enum QuadTreeError {
    /// Bounds with a non-finite field or a negative extent
    #[error("invalid bounds: x={x}, y={y}, width={width}, height={height}")]
    InvalidBounds {
        /// Left edge as supplied
        x: f64,
        /// Top edge as supplied
        y: f64,
        /// Width as supplied
        width: f64,
        /// Height as supplied
        height: f64,
    },

    /// Thresholds that cannot drive a tree
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML configuration text that failed to parse
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
