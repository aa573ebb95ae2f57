//! transform::families — per-family transform entry points.
//!
//! Purpose
//! -------
//! Offer the transforms in the parameterizations researchers usually work
//! with, without building a basis by hand:
//!
//! - triangular bases as a list of `(a, b, c)` tuples,
//! - Gaussian bases as a list of centers sharing one `sigma`,
//! - Bell bases as a list of centers sharing one width `a` and slope `b`.
//!
//! Key behaviors
//! -------------
//! - Each function validates the raw parameters into shapes (shape
//!   failures surface as `TransformError::Shape`) and then delegates to the
//!   generic routines in `direct` / `inverse` with default options.
//! - Inverse functions keep the `(x, components, shape parameters…)`
//!   argument order of the direct counterparts' callers.
//!
//! Conventions
//! -----------
//! - `*_upper` / `*_lower` return component vectors F↑ / F↓.
//! - `*_inverse_upper` reconstructs from F↑; `*_inverse_lower` from F↓.
use ndarray::Array1;

use crate::{
    membership::{Bell, Gaussian, Triangular},
    transform::{
        direct::{lower_transform, upper_transform},
        errors::TransformResult,
        inverse::{inverse_lower, inverse_upper},
        options::TransformOptions,
    },
};

fn triangles(params: &[(f64, f64, f64)]) -> TransformResult<Vec<Triangular>> {
    Ok(params.iter().map(|&p| Triangular::try_from(p)).collect::<Result<Vec<_>, _>>()?)
}

// ---- Triangular ----

/// F↑ for a triangular basis given as `(a, b, c)` tuples.
///
/// Examples
/// --------
/// ```rust
/// # use fuzzytrans::transform::triangular_upper;
/// let up = triangular_upper(&[(0.0, 1.0, 2.0)], &[0.5, 1.0], &[2.0, 3.0]).unwrap();
/// assert_eq!(up[0], 3.0);
/// ```
pub fn triangular_upper(
    params: &[(f64, f64, f64)], x_values: &[f64], f_values: &[f64],
) -> TransformResult<Array1<f64>> {
    upper_transform(&triangles(params)?, x_values, f_values, &TransformOptions::default())
}

/// F↓ for a triangular basis given as `(a, b, c)` tuples.
pub fn triangular_lower(
    params: &[(f64, f64, f64)], x_values: &[f64], f_values: &[f64],
) -> TransformResult<Array1<f64>> {
    lower_transform(&triangles(params)?, x_values, f_values, &TransformOptions::default())
}

/// Reconstruct from triangular F↑ at `x`.
pub fn triangular_inverse_upper(
    x: f64, upper: &[f64], params: &[(f64, f64, f64)],
) -> TransformResult<f64> {
    inverse_upper(&triangles(params)?, upper, x, &TransformOptions::default())
}

/// Reconstruct from triangular F↓ at `x`.
pub fn triangular_inverse_lower(
    x: f64, lower: &[f64], params: &[(f64, f64, f64)],
) -> TransformResult<f64> {
    inverse_lower(&triangles(params)?, lower, x, &TransformOptions::default())
}

// ---- Gaussian ----

/// F↑ for Gaussian sets at `centers` sharing `sigma`.
pub fn gaussian_upper(
    centers: &[f64], sigma: f64, x_values: &[f64], f_values: &[f64],
) -> TransformResult<Array1<f64>> {
    let basis = Gaussian::with_shared_sigma(centers, sigma)?;
    upper_transform(&basis, x_values, f_values, &TransformOptions::default())
}

/// F↓ for Gaussian sets at `centers` sharing `sigma`.
pub fn gaussian_lower(
    centers: &[f64], sigma: f64, x_values: &[f64], f_values: &[f64],
) -> TransformResult<Array1<f64>> {
    let basis = Gaussian::with_shared_sigma(centers, sigma)?;
    lower_transform(&basis, x_values, f_values, &TransformOptions::default())
}

/// Reconstruct from Gaussian F↑ at `x`.
pub fn gaussian_inverse_upper(
    x: f64, upper: &[f64], sigma: f64, centers: &[f64],
) -> TransformResult<f64> {
    let basis = Gaussian::with_shared_sigma(centers, sigma)?;
    inverse_upper(&basis, upper, x, &TransformOptions::default())
}

/// Reconstruct from Gaussian F↓ at `x`.
pub fn gaussian_inverse_lower(
    x: f64, lower: &[f64], sigma: f64, centers: &[f64],
) -> TransformResult<f64> {
    let basis = Gaussian::with_shared_sigma(centers, sigma)?;
    inverse_lower(&basis, lower, x, &TransformOptions::default())
}

// ---- Bell ----

/// F↑ for Bell sets at `centers` sharing width `a` and slope `b`.
pub fn bell_upper(
    centers: &[f64], a: f64, b: f64, x_values: &[f64], f_values: &[f64],
) -> TransformResult<Array1<f64>> {
    let basis = Bell::with_shared_shape(centers, a, b)?;
    upper_transform(&basis, x_values, f_values, &TransformOptions::default())
}

/// F↓ for Bell sets at `centers` sharing width `a` and slope `b`.
pub fn bell_lower(
    centers: &[f64], a: f64, b: f64, x_values: &[f64], f_values: &[f64],
) -> TransformResult<Array1<f64>> {
    let basis = Bell::with_shared_shape(centers, a, b)?;
    lower_transform(&basis, x_values, f_values, &TransformOptions::default())
}

/// Reconstruct from Bell F↑ at `x`.
pub fn bell_inverse_upper(
    x: f64, upper: &[f64], centers: &[f64], a: f64, b: f64,
) -> TransformResult<f64> {
    let basis = Bell::with_shared_shape(centers, a, b)?;
    inverse_upper(&basis, upper, x, &TransformOptions::default())
}

/// Reconstruct from Bell F↓ at `x`.
pub fn bell_inverse_lower(
    x: f64, lower: &[f64], centers: &[f64], a: f64, b: f64,
) -> TransformResult<f64> {
    let basis = Bell::with_shared_shape(centers, a, b)?;
    inverse_lower(&basis, lower, x, &TransformOptions::default())
}
