//! Hermite interpolation error types.
//!
//! ┌ [`ErrorKind::InputShape`]   : sequence lengths disagree with `n`, or `n < 1`
//! ├ [`ErrorKind::InputType`]    : an input element is not a finite real number
//! ├ [`ErrorKind::SingularNode`] : two base nodes coincide, zeroing a divisor
//! └ [`ErrorKind::NotBuilt`]     : table state read before a successful build

use thiserror::Error;


/// Coarse classification of [`InterpolationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputShape,
    InputType,
    SingularNode,
    NotBuilt,
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("empty input: at least one base point is required")]
    EmptyInput,

    #[error("unequal length: `{name}` has {got} elements, expected {expected}")]
    UnequalLength { name: &'static str, expected: usize, got: usize },

    #[error("non-finite value in `{name}` at index {idx}")]
    NonFiniteVec { name: &'static str, idx: usize },

    #[error("non-numeric entry in `{name}` at index {idx}: {raw:?}")]
    NonNumeric { name: &'static str, idx: usize, raw: String },

    #[error("invalid x_tol {got}: must be finite and >= 0")]
    InvalidXTol { got: f64 },

    #[error("duplicate or invalid node: x[{i}] and x[{j}] coincide at {x}")]
    SingularNode { i: usize, j: usize, x: f64 },

    #[error("divided difference q[{row}][{col}] is not finite")]
    NonFiniteDifference { row: usize, col: usize },

    #[error("table not built")]
    TableNotBuilt,
}

impl InterpolationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpolationError::EmptyInput
            | InterpolationError::UnequalLength { .. } => ErrorKind::InputShape,

            InterpolationError::NonFiniteVec { .. }
            | InterpolationError::NonNumeric { .. }
            | InterpolationError::InvalidXTol { .. } => ErrorKind::InputType,

            InterpolationError::SingularNode { .. }
            | InterpolationError::NonFiniteDifference { .. } => ErrorKind::SingularNode,

            InterpolationError::TableNotBuilt => ErrorKind::NotBuilt,
        }
    }
}
