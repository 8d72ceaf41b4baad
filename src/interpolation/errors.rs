use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("{algorithm} interpolation needs exactly {expected} points, got {got}")]
    PointCountMismatch { algorithm: &'static str, expected: usize, got: usize },

    #[error("invalid sample count {got}: must be >= 1")]
    InvalidSampleCount { got: usize },

    #[error("duplicate x-value {x}: vandermonde system is singular")]
    DuplicateX { x: f64 },

    #[error("singular {n}x{n} vandermonde system")]
    SingularSystem { n: usize },
}

impl InterpolationError { 
    /// Shape, length or value problems detected before any computation. 
    pub fn is_invalid_input(&self) -> bool { 
        !self.is_singular()
    }

    /// The linear system for the coefficients could not be solved. 
    pub fn is_singular(&self) -> bool { 
        matches!(
            self, 
            InterpolationError::DuplicateX { .. } | InterpolationError::SingularSystem { .. }
        )
    }
}
