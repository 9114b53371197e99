//! Error types for the frame engine and verification layer

use thiserror::Error;

/// Main error type for frame analysis operations
#[derive(Error, Debug)]
pub enum FEAError {
    #[error("Node {0} not found in model")]
    NodeNotFound(u32),

    #[error("Element {0} not found in model")]
    ElementNotFound(u32),

    #[error("Coordinate transformation {0} not found in model")]
    TransfNotFound(u32),

    #[error("Time series {0} not found in model")]
    TimeSeriesNotFound(u32),

    #[error("Load pattern {0} not found in model")]
    PatternNotFound(u32),

    #[error("Section '{0}' not found in section table")]
    SectionNotFound(String),

    #[error("Duplicate {kind} tag {tag}")]
    DuplicateTag { kind: &'static str, tag: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Stiffness matrix is not positive definite (pivot {0})")]
    NotPositiveDefinite(usize),

    #[error("Eigen analysis failed: {0}")]
    EigenFailed(String),

    #[error("Mode {mode} has non-positive eigenvalue {value}")]
    NonPositiveEigenvalue { mode: usize, value: f64 },

    #[error("Model not analyzed - run an analysis first")]
    NotAnalyzed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for frame analysis operations
pub type FEAResult<T> = Result<T, FEAError>;
