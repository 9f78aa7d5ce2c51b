//! Error types for clustering evaluation.

use thiserror::Error;

/// Errors raised while evaluating a clustering.
///
/// Evaluation is deterministic, so none of these are worth retrying with the
/// same inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Malformed or inconsistent clustering / point relation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Vector width differs from what the distance function or relation expects.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A scored cluster has no members. Points at a bug upstream of the evaluator.
    #[error("Cluster {index} has no members to score")]
    DegenerateCluster { index: usize },

    /// Unknown option name while parsing configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
