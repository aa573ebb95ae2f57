//! membership::gaussian — Gaussian fuzzy sets.
//!
//! `μ(x) = exp(−(x − c)² / (2σ²))`, evaluated through the standardized
//! distance `z = (x − c)/σ` so large offsets underflow cleanly to `0.0`
//! instead of producing `inf/inf`.
use crate::membership::{
    errors::{ShapeError, ShapeResult},
    traits::Membership,
};

/// Evaluate the Gaussian membership formula without validation.
///
/// Argument order follows the `(x, sigma, center)` convention of the
/// transform entry points.
///
/// Examples
/// --------
/// ```rust
/// # use fuzzytrans::membership::gaussian_fuzzy_set;
/// assert_eq!(gaussian_fuzzy_set(2.0, 0.5, 2.0), 1.0);
/// assert!((gaussian_fuzzy_set(1.0, 1.0, 0.0) - (-0.5_f64).exp()).abs() < 1e-15);
/// ```
#[inline]
pub fn gaussian_fuzzy_set(x: f64, sigma: f64, c: f64) -> f64 {
    let z = (x - c) / sigma;
    (-0.5 * z * z).exp()
}

/// Gaussian — validated Gaussian fuzzy set with center `c` and spread `σ`.
///
/// Invariants
/// ----------
/// - `center` is finite; `sigma` is finite and strictly positive.
/// - The support is unbounded; the degree is positive for every finite
///   `x` until it underflows to `0.0` far in the tails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    center: f64,
    sigma: f64,
}

impl Gaussian {
    /// Construct a validated Gaussian fuzzy set.
    ///
    /// Errors
    /// ------
    /// - `ShapeError::NonFiniteParameter` if `center` is NaN/±∞.
    /// - `ShapeError::InvalidSigma` if `sigma` is non-finite or `<= 0`.
    pub fn new(center: f64, sigma: f64) -> ShapeResult<Self> {
        if !center.is_finite() {
            return Err(ShapeError::NonFiniteParameter { name: "center", value: center });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(ShapeError::InvalidSigma { value: sigma });
        }
        Ok(Gaussian { center, sigma })
    }

    /// Build one Gaussian per center, all sharing `sigma`.
    pub fn with_shared_sigma(centers: &[f64], sigma: f64) -> ShapeResult<Vec<Self>> {
        centers.iter().map(|&c| Gaussian::new(c, sigma)).collect()
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Membership for Gaussian {
    #[inline]
    fn degree(&self, x: f64) -> f64 {
        gaussian_fuzzy_set(x, self.sigma, self.center)
    }

    fn center(&self) -> f64 {
        self.center
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn family(&self) -> &'static str {
        "gaussian"
    }
}
