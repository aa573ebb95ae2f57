//! membership — fuzzy-number shapes and their membership functions.
//!
//! Purpose
//! -------
//! Collect the three families of fuzzy numbers used as transform bases
//! (triangular, Gaussian, generalized Bell) together with the common
//! [`Membership`] interface and the shape-parameter errors.
//!
//! Key behaviors
//! -------------
//! - Raw closed-form kernels ([`triangular_fuzzy_number`],
//!   [`gaussian_fuzzy_set`], [`bell_function`]) that evaluate the formulas
//!   with no validation.
//! - Validated shapes ([`Triangular`], [`Gaussian`], [`Bell`]) whose
//!   constructors return [`ShapeResult`] and whose degrees lie in `[0, 1]`.
//! - [`FuzzyNumber`], a sum type for mixed bases.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every validated shape reaches degree `1` at its center and is
//!   non-negative everywhere.
//! - The module is pure: no I/O, no logging, no allocation beyond the
//!   array returned by [`Membership::degrees`].
//!
//! Downstream usage
//! ----------------
//! - `transform` is generic over [`Membership`] and accepts slices of any
//!   shape type, or of [`FuzzyNumber`] for mixed families.
//!
//! Testing notes
//! -------------
//! - Each shape module tests its closed form, edge cases and constructor
//!   rejections; [`errors`] tests `Display` payloads.

pub mod bell;
pub mod errors;
pub mod gaussian;
pub mod number;
pub mod traits;
pub mod triangular;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bell::{Bell, bell_function};
pub use self::errors::{ShapeError, ShapeResult};
pub use self::gaussian::{Gaussian, gaussian_fuzzy_set};
pub use self::number::FuzzyNumber;
pub use self::traits::Membership;
pub use self::triangular::{Triangular, triangular_fuzzy_number};
