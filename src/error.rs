//! Error types for Workout Flux

use thiserror::Error;

/// Errors that can occur while building or evaluating a workout
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{workout_type} expects {expected} parameters, got {actual}")]
    ArityMismatch {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter #{index} ({name}) for {workout_type}: {reason}")]
    InvalidParameter {
        workout_type: &'static str,
        index: usize,
        name: &'static str,
        reason: String,
    },

    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid workout package: {0}")]
    InvalidPackage(String),
}
