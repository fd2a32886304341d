/// Degenerate numeric input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// Normalizing a vector whose Euclidean norm is zero or not finite.
    #[error("cannot normalize zero-length vector in {context}")]
    ZeroNorm { context: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("non-finite component in {context}")]
    NonFinite { context: String },

    #[error("vector has no components")]
    EmptyVector,
}
