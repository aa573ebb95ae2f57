//! membership::bell — generalized Bell fuzzy sets.
//!
//! Purpose
//! -------
//! Implement the generalized Bell membership function
//! `μ(x) = 1 / (1 + |(x − c)/a|^(2b))` with width `a`, slope `b` and
//! center `c`.
//!
//! Key behaviors
//! -------------
//! - `μ(c) = 1` and `μ(c ± a) = 1/2` for every slope `b`.
//! - Larger `b` gives a flatter top and steeper flanks.
//! - Far tails decay towards zero; when `|(x − c)/a|^(2b)` overflows to
//!   `+∞` the degree is exactly `0.0`.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`Bell::new`] requires `a > 0`, `b > 0` and finite `c`.
//! - The raw formula [`bell_function`] accepts any `a != 0`, the sign of
//!   `a` being irrelevant under the absolute value.
use crate::membership::{
    errors::{ShapeError, ShapeResult},
    traits::Membership,
};

/// Evaluate the generalized Bell formula without validation.
///
/// Examples
/// --------
/// ```rust
/// # use fuzzytrans::membership::bell_function;
/// assert_eq!(bell_function(3.0, 2.0, 1.5, 3.0), 1.0);
/// assert_eq!(bell_function(5.0, 2.0, 1.5, 3.0), 0.5);
/// ```
#[inline]
pub fn bell_function(x: f64, a: f64, b: f64, c: f64) -> f64 {
    1.0 / (1.0 + ((x - c) / a).abs().powf(2.0 * b))
}

/// Bell — validated generalized Bell fuzzy set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bell {
    width: f64,
    slope: f64,
    center: f64,
}

impl Bell {
    /// Construct a validated Bell fuzzy set from `(a, b, c)`.
    ///
    /// Errors
    /// ------
    /// - `ShapeError::InvalidBellWidth` if `a` is non-finite or `<= 0`.
    /// - `ShapeError::InvalidBellSlope` if `b` is non-finite or `<= 0`.
    /// - `ShapeError::NonFiniteParameter` if `c` is NaN/±∞.
    pub fn new(a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        if !a.is_finite() || a <= 0.0 {
            return Err(ShapeError::InvalidBellWidth { value: a });
        }
        if !b.is_finite() || b <= 0.0 {
            return Err(ShapeError::InvalidBellSlope { value: b });
        }
        if !c.is_finite() {
            return Err(ShapeError::NonFiniteParameter { name: "c", value: c });
        }
        Ok(Bell { width: a, slope: b, center: c })
    }

    /// Build one Bell set per center, all sharing width `a` and slope `b`.
    pub fn with_shared_shape(centers: &[f64], a: f64, b: f64) -> ShapeResult<Vec<Self>> {
        centers.iter().map(|&c| Bell::new(a, b, c)).collect()
    }

    pub fn params(&self) -> (f64, f64, f64) {
        (self.width, self.slope, self.center)
    }
}

impl Membership for Bell {
    #[inline]
    fn degree(&self, x: f64) -> f64 {
        bell_function(x, self.width, self.slope, self.center)
    }

    fn center(&self) -> f64 {
        self.center
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn family(&self) -> &'static str {
        "bell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form values at the center, at c ± a, and off the crossover.
    // - Symmetry around the center and tail decay.
    // - Constructor validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the center value and the crossover points c ± a.
    //
    // Given
    // -----
    // - Bell(a = 2, b = 3, c = 1).
    //
    // Expect
    // ------
    // - μ(1) = 1, μ(3) = μ(−1) = 0.5.
    fn bell_center_and_crossover_points() {
        // Arrange
        let bell = Bell::new(2.0, 3.0, 1.0).expect("valid bell");

        // Act / Assert
        assert_eq!(bell.degree(1.0), 1.0);
        assert_relative_eq!(bell.degree(3.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(bell.degree(-1.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Check a hand-computed interior value.
    //
    // Given
    // -----
    // - Bell(a = 1, b = 1, c = 0) at x = 2.
    //
    // Expect
    // ------
    // - μ(2) = 1 / (1 + 2²) = 0.2.
    fn bell_matches_closed_form_off_crossover() {
        // Arrange
        let bell = Bell::new(1.0, 1.0, 0.0).expect("valid bell");

        // Act
        let mu = bell.degree(2.0);

        // Assert
        assert_relative_eq!(mu, 0.2, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Ensure huge offsets decay to exactly zero without NaN.
    //
    // Given
    // -----
    // - Bell(a = 1e-3, b = 50, c = 0) at x = 1e6.
    //
    // Expect
    // ------
    // - μ = 0.0.
    fn bell_overflowing_power_gives_zero() {
        // Arrange
        let bell = Bell::new(1e-3, 50.0, 0.0).expect("valid bell");

        // Act
        let mu = bell.degree(1e6);

        // Assert
        assert_eq!(mu, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Cover each rejection branch of `Bell::new` and the shared builder.
    //
    // Given
    // -----
    // - a = 0, b = −1, c = NaN; centers [0, 5] with a = 1, b = 2.
    //
    // Expect
    // ------
    // - `InvalidBellWidth`, `InvalidBellSlope`, `NonFiniteParameter`; two sets.
    fn bell_new_validates_parameters() {
        // Arrange / Act
        let width = Bell::new(0.0, 1.0, 0.0);
        let slope = Bell::new(1.0, -1.0, 0.0);
        let center = Bell::new(1.0, 1.0, f64::NAN);
        let basis = Bell::with_shared_shape(&[0.0, 5.0], 1.0, 2.0).expect("valid basis");

        // Assert
        assert!(matches!(width, Err(ShapeError::InvalidBellWidth { .. })));
        assert!(matches!(slope, Err(ShapeError::InvalidBellSlope { .. })));
        assert!(matches!(center, Err(ShapeError::NonFiniteParameter { name: "c", .. })));
        assert_eq!(basis[1].params(), (1.0, 2.0, 5.0));
    }
}
