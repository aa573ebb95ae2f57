//! membership::triangular — triangular fuzzy numbers.
//!
//! Purpose
//! -------
//! Implement the piecewise-linear triangular membership function defined by
//! a left foot `a`, a peak `b` and a right foot `c`, both as a raw formula
//! ([`triangular_fuzzy_number`]) and as a validated shape ([`Triangular`]).
//!
//! Key behaviors
//! -------------
//! - `μ(x) = 1` at the peak `x == b`, including degenerate shoulders where
//!   `a == b` or `b == c`.
//! - `μ(x) = 0` outside the open support `(a, c)`.
//! - Linear ramps `(x − a)/(b − a)` and `(c − x)/(c − b)` on either side of
//!   the peak.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`Triangular::new`] enforces finite parameters, `a <= b <= c` and
//!   `a < c`; the raw formula performs no validation and may return values
//!   outside `[0, 1]` for malformed parameters.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the ramps, the peak, the feet, degenerate shoulders,
//!   and every rejection branch of the constructor.
use crate::membership::{
    errors::{ShapeError, ShapeResult},
    traits::Membership,
};

/// Evaluate the triangular membership formula without validation.
///
/// Parameters
/// ----------
/// - `a`, `b`, `c`: `f64`
///   Left foot, peak and right foot.
/// - `x`: `f64`
///   Point to evaluate.
///
/// Returns
/// -------
/// `f64`
///   The membership degree. Inside `[0, 1]` whenever `a <= b <= c`.
///
/// Examples
/// --------
/// ```rust
/// # use fuzzytrans::membership::triangular_fuzzy_number;
/// assert_eq!(triangular_fuzzy_number(0.0, 1.0, 2.0, 0.5), 0.5);
/// assert_eq!(triangular_fuzzy_number(0.0, 1.0, 2.0, 1.0), 1.0);
/// assert_eq!(triangular_fuzzy_number(0.0, 1.0, 2.0, 2.0), 0.0);
/// ```
#[inline]
pub fn triangular_fuzzy_number(a: f64, b: f64, c: f64, x: f64) -> f64 {
    if x == b {
        1.0
    } else if x <= a || x >= c {
        0.0
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

/// Triangular — validated triangular fuzzy number `(a, b, c)`.
///
/// Fields
/// ------
/// - `a`: left foot; `μ(a) = 0` unless `a == b`.
/// - `b`: peak; `μ(b) = 1`.
/// - `c`: right foot; `μ(c) = 0` unless `b == c`.
///
/// Invariants
/// ----------
/// - All parameters are finite, `a <= b <= c` and `a < c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Construct a validated triangular fuzzy number.
    ///
    /// Errors
    /// ------
    /// - `ShapeError::NonFiniteParameter` if any of `a`, `b`, `c` is NaN/±∞.
    /// - `ShapeError::UnorderedTriangle` if `a <= b <= c` does not hold.
    /// - `ShapeError::EmptySupport` if `a == c`.
    pub fn new(a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(ShapeError::NonFiniteParameter { name, value });
            }
        }
        if a > b || b > c {
            return Err(ShapeError::UnorderedTriangle { a, b, c });
        }
        if a == c {
            return Err(ShapeError::EmptySupport { a, c });
        }
        Ok(Triangular { a, b, c })
    }

    pub fn params(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl TryFrom<(f64, f64, f64)> for Triangular {
    type Error = ShapeError;

    fn try_from((a, b, c): (f64, f64, f64)) -> ShapeResult<Self> {
        Triangular::new(a, b, c)
    }
}

impl Membership for Triangular {
    #[inline]
    fn degree(&self, x: f64) -> f64 {
        triangular_fuzzy_number(self.a, self.b, self.c, x)
    }

    fn center(&self) -> f64 {
        self.b
    }

    fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }

    fn family(&self) -> &'static str {
        "triangular"
    }
}
