//! Error types for times_drill_gen

use thiserror::Error;

/// Errors surfaced by request validation and the record store.
///
/// Question and choice generation never fail; only the edges of the crate do.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Invalid times table: {0} (tables start at 1)")]
    InvalidTable(u32),

    #[error("Multiple-choice probability must be within 0.0..=1.0 (got {0})")]
    InvalidProbability(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for times_drill_gen
pub type Result<T> = std::result::Result<T, DrillError>;
