//! transform::direct — upper and lower fuzzy transforms of sampled data.
//!
//! Purpose
//! -------
//! Compute the component vectors of the upper (F↑) and lower (F↓) fuzzy
//! transforms of a sampled function `f` with respect to a basis of fuzzy
//! numbers `A_1, …, A_n`.
//!
//! Key behaviors
//! -------------
//! - Upper transform: `F↑[k] = max_i A_k(x_i) · f_i`.
//! - Lower transform: `F↓[k] = min_i f_i / A_k(x_i)` over the samples with
//!   `A_k(x_i) > floor`; `+∞` when no sample is covered by `A_k`, or when
//!   every covered ratio overflows (subnormal degrees far in a tail).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated once at the public entry points
//!   ([`upper_transform`], [`lower_transform`]); the `*_components`
//!   kernels assume `x_values.len() == f_values.len() >= 1` and finite data.
//! - Upper components are always finite for validated inputs. Lower
//!   components are finite or `+∞`, never NaN.
//!
//! Conventions
//! -----------
//! - Component `k` corresponds to `basis[k]`; output order follows the
//!   basis order.
//! - A `warn!` event is emitted for each `+∞` lower component, tagged with
//!   the basis element's family. Uncovered elements and overflowed ratios
//!   get distinct messages.
//!
//! Testing notes
//! -------------
//! - Unit tests check hand-computed components for small triangular and
//!   Gaussian bases, the `+∞` path, the floor, and the defining
//!   inequalities `F↑[k] >= A_k(x_i) f_i` and `F↓[k] <= f_i / A_k(x_i)`.
use ndarray::Array1;
use tracing::{trace, warn};

use crate::{
    membership::Membership,
    transform::{
        errors::TransformResult,
        options::TransformOptions,
        validation::{validate_basis, validate_samples},
    },
};

/// Compute the upper fuzzy transform F↑ of sampled data.
///
/// Parameters
/// ----------
/// - `basis`: `&[M]`
///   Fuzzy numbers `A_1, …, A_n`; must be non-empty.
/// - `x_values`, `f_values`: `&[f64]`
///   Paired samples; see [`validate_samples`] for the pairing rules.
/// - `opts`: `&TransformOptions`
///   Length policy (the floor does not affect the upper transform).
///
/// Returns
/// -------
/// `TransformResult<Array1<f64>>`
///   `F↑` with one finite entry per basis element.
///
/// Errors
/// ------
/// - `TransformError::EmptyBasis` and any error of [`validate_samples`].
///
/// Examples
/// --------
/// ```rust
/// # use fuzzytrans::membership::Triangular;
/// # use fuzzytrans::transform::{upper_transform, TransformOptions};
/// let basis = [Triangular::new(0.0, 1.0, 2.0).unwrap()];
/// let opts = TransformOptions::default();
/// let up = upper_transform(&basis, &[0.5, 1.0, 1.5], &[4.0, 2.0, 4.0], &opts).unwrap();
/// assert_eq!(up[0], 2.0);
/// ```
pub fn upper_transform<M: Membership>(
    basis: &[M], x_values: &[f64], f_values: &[f64], opts: &TransformOptions,
) -> TransformResult<Array1<f64>> {
    validate_basis(basis.len())?;
    let n = validate_samples(x_values, f_values, opts)?;
    Ok(upper_components(basis, &x_values[..n], &f_values[..n]))
}

/// Compute the lower fuzzy transform F↓ of sampled data.
///
/// Parameters
/// ----------
/// - `basis`: `&[M]`
///   Fuzzy numbers `A_1, …, A_n`; must be non-empty.
/// - `x_values`, `f_values`: `&[f64]`
///   Paired samples.
/// - `opts`: `&TransformOptions`
///   Length policy and membership floor.
///
/// Returns
/// -------
/// `TransformResult<Array1<f64>>`
///   `F↓`; an entry is `+∞` when no sample has degree above the floor.
///
/// Errors
/// ------
/// - `TransformError::EmptyBasis` and any error of [`validate_samples`].
pub fn lower_transform<M: Membership>(
    basis: &[M], x_values: &[f64], f_values: &[f64], opts: &TransformOptions,
) -> TransformResult<Array1<f64>> {
    validate_basis(basis.len())?;
    let n = validate_samples(x_values, f_values, opts)?;
    Ok(lower_components(basis, &x_values[..n], &f_values[..n], opts.floor))
}

// ---- Kernels (inputs already validated) ----

pub(crate) fn upper_components<M: Membership>(
    basis: &[M], x_values: &[f64], f_values: &[f64],
) -> Array1<f64> {
    basis
        .iter()
        .enumerate()
        .map(|(k, a)| {
            let value = x_values
                .iter()
                .zip(f_values)
                .map(|(&x, &f)| a.degree(x) * f)
                .fold(f64::NEG_INFINITY, f64::max);
            trace!(component = k, value, "upper component");
            value
        })
        .collect()
}

pub(crate) fn lower_components<M: Membership>(
    basis: &[M], x_values: &[f64], f_values: &[f64], floor: f64,
) -> Array1<f64> {
    basis
        .iter()
        .enumerate()
        .map(|(k, a)| {
            let (covered, value) = x_values
                .iter()
                .zip(f_values)
                .filter_map(|(&x, &f)| a.covered_degree(x, floor).map(|mu| f / mu))
                .fold((0_usize, f64::INFINITY), |(n, lo), ratio| (n + 1, lo.min(ratio)));
            if covered == 0 {
                warn!(
                    component = k,
                    family = a.family(),
                    center = a.center(),
                    "no sample covered; lower component is +inf"
                );
            } else if value.is_infinite() {
                warn!(
                    component = k,
                    family = a.family(),
                    center = a.center(),
                    covered,
                    "f / A overflowed on every covered sample; lower component is +inf"
                );
            } else {
                trace!(component = k, value, "lower component");
            }
            value
        })
        .collect()
}
