pub mod ops;
pub mod vector;

use thiserror::Error;

/// Significant digits carried through decimal division and square roots.
pub const PRECISION: u64 = 30;

/// Default tolerance for zero-magnitude and orthogonality tests.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Zero Vector: {0}")]
    ZeroVector(String),
    #[error("Dimension Mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Dimension Error: {0}")]
    Dimension(String),
    #[error("No Parallel Component: {0}")]
    NoParallelComponent(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use ops::{
    angle, angle_degrees, cross_product, dot, euclidean_distance, generate_random_vectors,
    is_orthogonal, is_orthogonal_within, is_parallel,
};
pub use vector::Vector;
