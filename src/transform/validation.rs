//! transform::validation — shared input guards for the transform routines.
//!
//! Purpose
//! -------
//! Centralize the input checks every transform performs before touching
//! the data: sample pairing and finiteness, basis non-emptiness, component
//! vector shape, and evaluation-point finiteness.
//!
//! Key behaviors
//! -------------
//! - Apply the [`LengthPolicy`] and return the number of usable sample
//!   pairs, so callers can slice both arrays to the same length.
//! - Map invalid inputs into structured [`TransformError`] values.
//!
//! Invariants & assumptions
//! ------------------------
//! - A successful [`validate_samples`] guarantees `n >= 1` pairs with
//!   finite `x` and `f` at indices `0..n`.
//! - Components may contain `+∞` (a lower component with no covered
//!   sample) but never NaN.
//!
//! Conventions
//! -----------
//! - Pure validation; the only side effect is a `warn!` event when
//!   `Truncate` drops samples.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and the truncation path.
use tracing::warn;

use crate::transform::{
    errors::{TransformError, TransformResult},
    options::{LengthPolicy, TransformOptions},
};

/// Validate paired samples and return the number of usable pairs.
///
/// Parameters
/// ----------
/// - `x_values`: `&[f64]`
///   Sample abscissae.
/// - `f_values`: `&[f64]`
///   Sampled function values, paired with `x_values` by index.
/// - `opts`: `&TransformOptions`
///   Supplies the [`LengthPolicy`].
///
/// Returns
/// -------
/// `TransformResult<usize>`
///   The count `n` of pairs to use; both arrays are valid on `0..n`.
///
/// Errors
/// ------
/// - `TransformError::LengthMismatch` under `Strict` when lengths differ.
/// - `TransformError::EmptySamples` when `n == 0`.
/// - `TransformError::NonFiniteSample` for the first NaN/±∞ in `0..n`,
///   checking `x_values` before `f_values` at each index.
///
/// Examples
/// --------
/// ```rust
/// # use fuzzytrans::transform::{validate_samples, LengthPolicy, TransformOptions};
/// let opts = TransformOptions::new(0.0, LengthPolicy::Truncate).unwrap();
/// assert_eq!(validate_samples(&[0.0, 1.0, 2.0], &[1.0, 2.0], &opts).unwrap(), 2);
/// ```
pub fn validate_samples(
    x_values: &[f64], f_values: &[f64], opts: &TransformOptions,
) -> TransformResult<usize> {
    let (x_len, f_len) = (x_values.len(), f_values.len());
    let n = match opts.length_policy {
        LengthPolicy::Strict if x_len != f_len => {
            return Err(TransformError::LengthMismatch { x_len, f_len });
        }
        LengthPolicy::Strict => x_len,
        LengthPolicy::Truncate => {
            let n = x_len.min(f_len);
            if x_len != f_len {
                warn!(x_len, f_len, used = n, "sample arrays differ in length; truncating");
            }
            n
        }
    };

    if n == 0 {
        return Err(TransformError::EmptySamples);
    }

    for (index, (&x, &f)) in x_values.iter().zip(f_values).take(n).enumerate() {
        if !x.is_finite() {
            return Err(TransformError::NonFiniteSample { series: "x_values", index, value: x });
        }
        if !f.is_finite() {
            return Err(TransformError::NonFiniteSample { series: "f_values", index, value: f });
        }
    }

    Ok(n)
}

/// Reject an empty basis.
pub fn validate_basis(basis_len: usize) -> TransformResult<()> {
    if basis_len == 0 {
        return Err(TransformError::EmptyBasis);
    }
    Ok(())
}

/// Check that a component vector matches its basis and holds no NaN.
///
/// Errors
/// ------
/// - `TransformError::EmptyBasis` when `basis_len == 0`.
/// - `TransformError::ComponentLengthMismatch` when the lengths differ.
/// - `TransformError::NaNComponent` for the first NaN entry.
pub fn validate_components(basis_len: usize, components: &[f64]) -> TransformResult<()> {
    validate_basis(basis_len)?;
    if components.len() != basis_len {
        return Err(TransformError::ComponentLengthMismatch {
            expected: basis_len,
            actual: components.len(),
        });
    }
    if let Some(index) = components.iter().position(|v| v.is_nan()) {
        return Err(TransformError::NaNComponent { index });
    }
    Ok(())
}

/// Reject NaN/±∞ evaluation points.
pub fn validate_point(x: f64) -> TransformResult<()> {
    if !x.is_finite() {
        return Err(TransformError::NonFiniteEvaluationPoint { value: x });
    }
    Ok(())
}
