use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// All failures are synchronous and fail-fast; nothing is caught internally.
/// An invalid operation aborts the computation that requested it, the graph
/// built so far stays valid and inspectable.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Unsupported data type: {type_name} cannot be represented as the engine scalar")]
    UnsupportedDataType { type_name: &'static str },

    #[error("Unsupported operand for {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
