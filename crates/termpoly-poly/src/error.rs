//! Errors raised by term and polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Two terms with different exponents were combined.
    #[error("exponent mismatch: cannot combine x^{lhs} with x^{rhs}")]
    InvalidOperand {
        /// Exponent of the left operand.
        lhs: i32,
        /// Exponent of the right operand.
        rhs: i32,
    },

    /// A fixed-capacity result does not match the number of terms produced.
    #[error("capacity mismatch: expected {expected} terms, got {actual}")]
    CapacityMismatch {
        /// Number of terms the operation produces.
        expected: usize,
        /// Capacity supplied by the caller.
        actual: usize,
    },
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
