//! membership::errors — shape-parameter errors and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the validating
//! constructors of the fuzzy-number shapes, together with a conversion to
//! Python exceptions for the optional PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`ShapeResult`] and [`ShapeError`] as the canonical result and
//!   error types for [`Triangular`](super::Triangular),
//!   [`Gaussian`](super::Gaussian) and [`Bell`](super::Bell) construction.
//! - Attach human-readable `Display` messages to each variant that embed
//!   the offending parameter values.
//! - Implement `From<ShapeError> for PyErr` behind the `python-bindings`
//!   feature, mapping every variant to `ValueError`.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the domain constraint that failed
//!   ("sigma must be finite and > 0") rather than low-level details.
//! - Transform-level failures (sample lengths, empty bases) live in
//!   `transform::errors`; this module only covers shape parameters.
//!
//! Testing notes
//! -------------
//! - Unit tests check that each variant's `Display` output embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ShapeResult<T> = Result<T, ShapeError>;

/// ShapeError — invalid parameters for a fuzzy-number shape.
///
/// Variants
/// --------
/// - `NonFiniteParameter { name, value }`
///   A shape parameter is NaN or ±∞.
/// - `UnorderedTriangle { a, b, c }`
///   Triangular parameters violate `a <= b <= c`.
/// - `EmptySupport { a, c }`
///   Triangular feet coincide (`a == c`), leaving no support.
/// - `InvalidSigma { value }`
///   Gaussian spread is not strictly positive.
/// - `InvalidBellWidth { value }`
///   Bell width `a` is not strictly positive.
/// - `InvalidBellSlope { value }`
///   Bell slope `b` is not strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    NonFiniteParameter { name: &'static str, value: f64 },
    UnorderedTriangle { a: f64, b: f64, c: f64 },
    EmptySupport { a: f64, c: f64 },
    InvalidSigma { value: f64 },
    InvalidBellWidth { value: f64 },
    InvalidBellSlope { value: f64 },
}

impl std::error::Error for ShapeError {}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NonFiniteParameter { name, value } => {
                write!(f, "Shape parameter `{name}` must be finite; got: {value}")
            }
            ShapeError::UnorderedTriangle { a, b, c } => {
                write!(f, "Triangular parameters must satisfy a <= b <= c; got: ({a}, {b}, {c})")
            }
            ShapeError::EmptySupport { a, c } => {
                write!(f, "Triangular support is empty: a ({a}) must be < c ({c})")
            }
            ShapeError::InvalidSigma { value } => {
                write!(f, "Gaussian sigma must be finite and > 0; got: {value}")
            }
            ShapeError::InvalidBellWidth { value } => {
                write!(f, "Bell width `a` must be finite and > 0; got: {value}")
            }
            ShapeError::InvalidBellSlope { value } => {
                write!(f, "Bell slope `b` must be finite and > 0; got: {value}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ShapeError> for PyErr {
    fn from(err: ShapeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
