use thiserror::Error;

/// Custom error type for the gradlet framework.
///
/// The scalar operations themselves never fail (floating-point edge cases
/// propagate as `inf`/`NaN`); errors come from the structural layers built
/// on top of them: networks, losses, optimizers and data loading.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradletError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Operation {0} requires at least one element")]
    EmptyInput(String),
}
