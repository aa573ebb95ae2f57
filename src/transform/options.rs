//! transform::options — configuration for transform evaluation.
//!
//! Purpose
//! -------
//! Bundle the two knobs that change how samples are paired and how
//! "uncovered" points are detected, so they can be configured once and
//! threaded through direct and inverse transforms alike.
//!
//! Key behaviors
//! -------------
//! - [`LengthPolicy`] selects between rejecting mismatched sample arrays
//!   (`Strict`) and pairing them up to the shorter length (`Truncate`).
//! - [`TransformOptions::floor`] sets the membership threshold: a degree
//!   `<= floor` counts as "not covered" in the lower transform and in the
//!   upper reconstruction.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 <= floor < 1` and `floor` is finite; enforced by
//!   [`TransformOptions::new`].
//! - The default (`floor = 0`, `Strict`) reproduces the plain `> 0`
//!   coverage test and the equal-length sample contract.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the documented defaults and each rejection branch of
//!   [`TransformOptions::new`].
use crate::transform::errors::{TransformError, TransformResult};

/// LengthPolicy — how to pair `x_values` with `f_values`.
///
/// Variants
/// --------
/// - `Strict`: lengths must match; a mismatch is `TransformError::LengthMismatch`.
/// - `Truncate`: pair by index up to the shorter length; extra samples are
///   ignored and a warning is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    #[default]
    Strict,
    Truncate,
}

/// TransformOptions — evaluation settings shared by all transforms.
///
/// Fields
/// ------
/// - `floor`: `f64`
///   Membership threshold for coverage; defaults to `0.0`.
/// - `length_policy`: [`LengthPolicy`]
///   Sample pairing rule; defaults to `Strict`.
///
/// Notes
/// -----
/// - Fields are public for reading; build non-default values through
///   [`TransformOptions::new`] so the floor is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    /// Degrees at or below this value are treated as zero membership.
    pub floor: f64,
    /// Pairing rule for `x_values` / `f_values`.
    pub length_policy: LengthPolicy,
}

impl TransformOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `TransformError::InvalidFloor` if `floor` is non-finite, negative,
    ///   or `>= 1` (which would leave every point uncovered).
    pub fn new(floor: f64, length_policy: LengthPolicy) -> TransformResult<Self> {
        if !floor.is_finite() || !(0.0..1.0).contains(&floor) {
            return Err(TransformError::InvalidFloor { value: floor });
        }
        Ok(TransformOptions { floor, length_policy })
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions { floor: 0.0, length_policy: LengthPolicy::Strict }
    }
}
