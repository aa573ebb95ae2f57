//! transform::model — a fitted upper/lower fuzzy transform.
//!
//! Purpose
//! -------
//! Bundle a basis, the samples it was fitted on, and both component vectors
//! into one immutable value, so reconstructions can be evaluated many times
//! without repeating validation or the forward pass.
//!
//! Key behaviors
//! -------------
//! - [`FuzzyTransform::fit`] validates the basis and samples once, applies
//!   the [`LengthPolicy`](super::LengthPolicy), and computes F↑ and F↓.
//! - Reconstruction accessors evaluate `f↑` / `f↓` at single points or
//!   over slices using the options captured at fit time.
//! - [`FuzzyTransform::bounds_at_samples`] returns `(f↓(x_i), f↑(x_i))`
//!   at the fitted abscissae, the usual way to inspect approximation
//!   quality.
//!
//! Invariants & assumptions
//! ------------------------
//! - `upper.len() == lower.len() == basis.len() >= 1`.
//! - `x_values.len() == f_values.len() >= 1` after the length policy.
//! - For non-negative samples each covered by some basis element,
//!   `f↓(x_i) <= f_i <= f↑(x_i)`.
//!
//! Downstream usage
//! ----------------
//! - Use the free functions in `direct` / `inverse` for one-shot
//!   evaluations; use [`FuzzyTransform`] when the same components are
//!   reconstructed repeatedly.
//!
//! Testing notes
//! -------------
//! - Unit tests cover agreement with the free functions, truncation at fit
//!   time, and the sample-bounds property. End-to-end pipelines live in
//!   `tests/`.
use ndarray::Array1;
use tracing::debug;

use crate::{
    membership::Membership,
    transform::{
        direct::{lower_components, upper_components},
        errors::TransformResult,
        inverse::{lower_at, upper_at},
        options::TransformOptions,
        validation::{validate_basis, validate_point, validate_samples},
    },
};

/// FuzzyTransform — basis, samples and fitted F↑ / F↓ components.
///
/// Fields
/// ------
/// - `basis`: `Vec<M>`
///   Fuzzy numbers the transform was taken against.
/// - `x_values`, `f_values`: `Array1<f64>`
///   Paired samples actually used (after truncation, if any).
/// - `upper`, `lower`: `Array1<f64>`
///   Components F↑ and F↓, one per basis element.
/// - `opts`: [`TransformOptions`]
///   Options used for fitting and for every later reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyTransform<M> {
    basis: Vec<M>,
    x_values: Array1<f64>,
    f_values: Array1<f64>,
    upper: Array1<f64>,
    lower: Array1<f64>,
    opts: TransformOptions,
}

impl<M: Membership> FuzzyTransform<M> {
    /// Fit both transforms of `(x_values, f_values)` against `basis`.
    ///
    /// Errors
    /// ------
    /// - `TransformError::EmptyBasis` and any error of
    ///   [`validate_samples`](super::validate_samples).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use fuzzytrans::membership::Gaussian;
    /// # use fuzzytrans::transform::{FuzzyTransform, TransformOptions};
    /// let basis = Gaussian::with_shared_sigma(&[0.0, 1.0], 0.5).unwrap();
    /// let x = [0.0, 0.5, 1.0];
    /// let f = [1.0, 2.0, 1.0];
    /// let ft = FuzzyTransform::fit(basis, &x, &f, TransformOptions::default()).unwrap();
    /// let (low, high) = ft.bounds_at_samples();
    /// assert!(low.iter().zip(&f).all(|(l, v)| *l <= v + 1e-12));
    /// assert!(high.iter().zip(&f).all(|(h, v)| *h >= v - 1e-12));
    /// ```
    pub fn fit(
        basis: Vec<M>, x_values: &[f64], f_values: &[f64], opts: TransformOptions,
    ) -> TransformResult<Self> {
        validate_basis(basis.len())?;
        let n = validate_samples(x_values, f_values, &opts)?;
        let (x_values, f_values) = (&x_values[..n], &f_values[..n]);

        debug!(
            basis = basis.len(),
            samples = n,
            floor = opts.floor,
            policy = ?opts.length_policy,
            "fitting fuzzy transform"
        );

        let upper = upper_components(&basis, x_values, f_values);
        let lower = lower_components(&basis, x_values, f_values, opts.floor);

        Ok(FuzzyTransform {
            basis,
            x_values: Array1::from(x_values.to_vec()),
            f_values: Array1::from(f_values.to_vec()),
            upper,
            lower,
            opts,
        })
    }

    pub fn basis(&self) -> &[M] {
        &self.basis
    }

    pub fn options(&self) -> &TransformOptions {
        &self.opts
    }

    /// Components F↑.
    pub fn upper_components(&self) -> &Array1<f64> {
        &self.upper
    }

    /// Components F↓; may contain `+∞` for uncovered basis elements.
    pub fn lower_components(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn samples(&self) -> (&Array1<f64>, &Array1<f64>) {
        (&self.x_values, &self.f_values)
    }

    /// `f↑(x)`; errors only on a non-finite `x`.
    pub fn reconstruct_upper(&self, x: f64) -> TransformResult<f64> {
        validate_point(x)?;
        Ok(upper_at(&self.basis, &self.upper, x, self.opts.floor))
    }

    /// `f↓(x)`; errors only on a non-finite `x`.
    pub fn reconstruct_lower(&self, x: f64) -> TransformResult<f64> {
        validate_point(x)?;
        Ok(lower_at(&self.basis, &self.lower, x, self.opts.floor))
    }

    pub fn reconstruct_upper_many(&self, xs: &[f64]) -> TransformResult<Array1<f64>> {
        xs.iter().map(|&x| self.reconstruct_upper(x)).collect()
    }

    pub fn reconstruct_lower_many(&self, xs: &[f64]) -> TransformResult<Array1<f64>> {
        xs.iter().map(|&x| self.reconstruct_lower(x)).collect()
    }

    /// Lower and upper reconstructions at the fitted sample points.
    ///
    /// Returns
    /// -------
    /// `(Array1<f64>, Array1<f64>)`
    ///   `(f↓(x_i), f↑(x_i))` for every fitted `x_i`. Sample points are
    ///   finite by construction, so this never fails.
    pub fn bounds_at_samples(&self) -> (Array1<f64>, Array1<f64>) {
        let floor = self.opts.floor;
        let lower = self.x_values.mapv(|x| lower_at(&self.basis, &self.lower, x, floor));
        let upper = self.x_values.mapv(|x| upper_at(&self.basis, &self.upper, x, floor));
        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::{FuzzyNumber, Gaussian, Triangular};
    use crate::transform::{
        direct::{lower_transform, upper_transform},
        errors::TransformError,
        inverse::inverse_upper,
        options::LengthPolicy,
    };
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of fitted components and reconstructions with the free
    //   functions in `direct` / `inverse`.
    // - Truncation under `LengthPolicy::Truncate` at fit time.
    // - The sample-bounds property on a mixed-family basis and on a basis
    //   with subnormal tail degrees.
    // - Constant functions reproduced exactly when every element peaks on
    //   a sample.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that fitted components equal the free-function results.
    //
    // Given
    // -----
    // - Gaussian centers [0, 0.5, 1], sigma 0.3; f(x) = sin(3x) + 2 on 11 points.
    //
    // Expect
    // ------
    // - Identical F↑ / F↓, and identical f↑ at x = 0.37.
    fn fit_matches_free_functions() {
        // Arrange
        let basis = Gaussian::with_shared_sigma(&[0.0, 0.5, 1.0], 0.3).expect("valid basis");
        let x: Vec<f64> = (0..11).map(|i| i as f64 / 10.0).collect();
        let f: Vec<f64> = x.iter().map(|v| (3.0 * v).sin() + 2.0).collect();
        let opts = TransformOptions::default();

        // Act
        let ft = FuzzyTransform::fit(basis.clone(), &x, &f, opts).expect("valid fit");
        let up = upper_transform(&basis, &x, &f, &opts).expect("valid");
        let down = lower_transform(&basis, &x, &f, &opts).expect("valid");
        let rec = inverse_upper(&basis, up.as_slice().expect("contiguous"), 0.37, &opts)
            .expect("valid");

        // Assert
        assert_eq!(ft.upper_components(), &up);
        assert_eq!(ft.lower_components(), &down);
        assert_eq!(ft.reconstruct_upper(0.37).expect("finite point"), rec);
    }

    #[test]
    // Purpose
    // -------
    // Ensure truncation at fit time keeps only the paired prefix.
    //
    // Given
    // -----
    // - x of length 4, f of length 3, `Truncate`.
    //
    // Expect
    // ------
    // - Stored samples have length 3.
    fn fit_truncates_under_truncate_policy() {
        // Arrange
        let basis = vec![Triangular::new(0.0, 1.0, 2.0).expect("valid triangle")];
        let opts = TransformOptions::new(0.0, LengthPolicy::Truncate).expect("valid options");

        // Act
        let ft = FuzzyTransform::fit(basis, &[0.5, 1.0, 1.5, 9.0], &[1.0, 2.0, 1.0], opts)
            .expect("valid fit");

        // Assert
        let (xs, fs) = ft.samples();
        assert_eq!(xs.len(), 3);
        assert_eq!(fs.len(), 3);
        assert_eq!(ft.options().length_policy, LengthPolicy::Truncate);
    }

    #[test]
    // Purpose
    // -------
    // Check f↓(x_i) <= f_i <= f↑(x_i) on a mixed-family basis.
    //
    // Given
    // -----
    // - Basis: triangle (−1, 0, 1), Gaussian (1, 0.4), triangle (1, 2, 3).
    // - f(x) = 1 + x(2 − x) ≥ 0 sampled on [0, 2] in steps of 0.1.
    //
    // Expect
    // ------
    // - The sandwich holds at every sample (up to 1e-12).
    fn bounds_at_samples_sandwich_the_data() {
        // Arrange
        let basis: Vec<FuzzyNumber> = vec![
            Triangular::new(-1.0, 0.0, 1.0).expect("valid").into(),
            Gaussian::new(1.0, 0.4).expect("valid").into(),
            Triangular::new(1.0, 2.0, 3.0).expect("valid").into(),
        ];
        let x: Vec<f64> = (0..=20).map(|i| i as f64 / 10.0).collect();
        let f: Vec<f64> = x.iter().map(|v| 1.0 + v * (2.0 - v)).collect();

        // Act
        let ft = FuzzyTransform::fit(basis, &x, &f, TransformOptions::default()).expect("fit");
        let (low, high) = ft.bounds_at_samples();

        // Assert
        for i in 0..x.len() {
            assert!(low[i] <= f[i] + 1e-12, "lower bound {} > f = {} at {}", low[i], f[i], x[i]);
            assert!(high[i] >= f[i] - 1e-12, "upper bound {} < f = {} at {}", high[i], f[i], x[i]);
        }
    }

    #[test]
    // Purpose
    // -------
    // Keep the sample bounds valid when a basis element's degrees on the
    // data are subnormal, so its lower component overflows to +∞.
    //
    // Given
    // -----
    // - Gaussian centers [0, 38], sigma 1; x = [0, 0.1]; f = [1, 1].
    //
    // Expect
    // ------
    // - F↓ = [1, +∞]; f↓(x_i) <= 1 <= f↑(x_i) at both samples.
    fn bounds_hold_with_subnormal_tail_degrees() {
        // Arrange
        let basis = Gaussian::with_shared_sigma(&[0.0, 38.0], 1.0).expect("valid basis");
        let x = [0.0, 0.1];
        let f = [1.0, 1.0];

        // Act
        let ft = FuzzyTransform::fit(basis, &x, &f, TransformOptions::default()).expect("fit");
        let (low, high) = ft.bounds_at_samples();

        // Assert
        assert_eq!(ft.lower_components()[1], f64::INFINITY);
        for i in 0..x.len() {
            assert!(low[i] <= f[i] + 1e-12, "lower bound {} > f = {} at {}", low[i], f[i], x[i]);
            assert!(high[i] >= f[i] - 1e-12, "upper bound {} < f = {} at {}", high[i], f[i], x[i]);
        }
        assert_relative_eq!(low[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a positive constant is reproduced exactly when every
    // basis element peaks on a sample.
    //
    // Given
    // -----
    // - Triangles peaking at 0, 1, 2; x = [0, 0.5, 1, 1.5, 2]; f ≡ 3.
    //
    // Expect
    // ------
    // - F↑ = F↓ = [3, 3, 3]; f↑(1) = f↓(1) = 3.
    fn constant_function_is_reproduced() {
        // Arrange
        let basis = vec![
            Triangular::new(-1.0, 0.0, 1.0).expect("valid"),
            Triangular::new(0.0, 1.0, 2.0).expect("valid"),
            Triangular::new(1.0, 2.0, 3.0).expect("valid"),
        ];
        let x = [0.0, 0.5, 1.0, 1.5, 2.0];
        let f = [3.0; 5];

        // Act
        let ft = FuzzyTransform::fit(basis, &x, &f, TransformOptions::default()).expect("fit");

        // Assert
        assert_eq!(ft.upper_components().to_vec(), vec![3.0, 3.0, 3.0]);
        assert_eq!(ft.lower_components().to_vec(), vec![3.0, 3.0, 3.0]);
        assert_relative_eq!(ft.reconstruct_upper(1.0).expect("finite"), 3.0, epsilon = 1e-12);
        assert_relative_eq!(ft.reconstruct_lower(1.0).expect("finite"), 3.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure fit and reconstruction propagate validation errors.
    //
    // Given
    // -----
    // - An empty basis; a valid fit queried at x = NaN.
    //
    // Expect
    // ------
    // - `EmptyBasis`; `NonFiniteEvaluationPoint`.
    fn fit_and_reconstruct_propagate_errors() {
        // Arrange
        let empty: Vec<Triangular> = Vec::new();
        let basis = vec![Triangular::new(0.0, 1.0, 2.0).expect("valid")];

        // Act
        let bad_fit = FuzzyTransform::fit(empty, &[1.0], &[1.0], TransformOptions::default());
        let ft = FuzzyTransform::fit(basis, &[1.0], &[1.0], TransformOptions::default())
            .expect("valid fit");
        let bad_point = ft.reconstruct_lower_many(&[1.0, f64::NAN]);

        // Assert
        assert_eq!(bad_fit, Err(TransformError::EmptyBasis));
        assert!(matches!(bad_point, Err(TransformError::NonFiniteEvaluationPoint { .. })));
    }
}
