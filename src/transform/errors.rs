//! transform::errors — error types for the upper/lower fuzzy transforms.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned by every public
//! transform routine, plus the conversion layer to Python exceptions used
//! by the optional PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`TransformResult`] and [`TransformError`] covering sample
//!   validation, basis/component shape checks, options validation and
//!   wrapped shape-parameter failures.
//! - Implement `From<ShapeError> for TransformError` so family entry points
//!   can build their bases with `?`.
//! - Implement `From<TransformError> for PyErr` behind `python-bindings`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Transform routines validate inputs through `transform::validation`
//!   and return these errors instead of panicking.
//! - Variants carry only scalars (indices, lengths, offending values) so
//!   they stay cheap to clone and compare in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests check payload embedding in `Display` and the
//!   `ShapeError` conversion.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::membership::errors::ShapeError;

pub type TransformResult<T> = Result<T, TransformError>;

/// TransformError — failures of the fuzzy transform routines.
///
/// Variants
/// --------
/// - `EmptySamples`
///   No sample pairs are available after applying the length policy.
/// - `LengthMismatch { x_len, f_len }`
///   `x_values` and `f_values` differ in length under `LengthPolicy::Strict`.
/// - `NonFiniteSample { series, index, value }`
///   A sample in `series` ("x_values" or "f_values") is NaN or ±∞.
/// - `EmptyBasis`
///   The basis (list of fuzzy numbers) is empty.
/// - `ComponentLengthMismatch { expected, actual }`
///   An inverse transform received a component vector whose length differs
///   from the basis size.
/// - `NaNComponent { index }`
///   A transform component is NaN. `+∞` is allowed for lower components.
/// - `NonFiniteEvaluationPoint { value }`
///   An inverse transform was asked to evaluate at a NaN/±∞ point.
/// - `InvalidFloor { value }`
///   `TransformOptions::floor` is outside `[0, 1)` or non-finite.
/// - `Shape(ShapeError)`
///   A basis element could not be constructed from raw parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    // ---- Samples ----
    EmptySamples,
    LengthMismatch { x_len: usize, f_len: usize },
    NonFiniteSample { series: &'static str, index: usize, value: f64 },
    // ---- Basis / components ----
    EmptyBasis,
    ComponentLengthMismatch { expected: usize, actual: usize },
    NaNComponent { index: usize },
    NonFiniteEvaluationPoint { value: f64 },
    // ---- Options ----
    InvalidFloor { value: f64 },
    // ---- Shapes ----
    Shape(ShapeError),
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::EmptySamples => {
                write!(f, "At least one (x, f(x)) sample pair is required.")
            }
            TransformError::LengthMismatch { x_len, f_len } => {
                write!(
                    f,
                    "x_values and f_values must have equal length: got {x_len} and {f_len}"
                )
            }
            TransformError::NonFiniteSample { series, index, value } => {
                write!(f, "{series}[{index}] must be finite; got: {value}")
            }
            TransformError::EmptyBasis => {
                write!(f, "The basis must contain at least one fuzzy number.")
            }
            TransformError::ComponentLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Component vector length must equal basis size: expected {expected}, got {actual}"
                )
            }
            TransformError::NaNComponent { index } => {
                write!(f, "Transform component at index {index} is NaN")
            }
            TransformError::NonFiniteEvaluationPoint { value } => {
                write!(f, "Evaluation point must be finite; got: {value}")
            }
            TransformError::InvalidFloor { value } => {
                write!(f, "Membership floor must be finite with 0 <= floor < 1; got: {value}")
            }
            TransformError::Shape(err) => write!(f, "Invalid fuzzy number: {err}"),
        }
    }
}

impl From<ShapeError> for TransformError {
    fn from(err: ShapeError) -> TransformError {
        TransformError::Shape(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
