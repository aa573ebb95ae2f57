//! membership::traits — the common interface of fuzzy-number shapes.
//!
//! Every shape in this crate maps a crisp `x` to a membership degree. The
//! transform layer only needs that mapping, so it is generic over
//! [`Membership`] and works the same for triangular, Gaussian, Bell or
//! mixed bases.
use ndarray::Array1;

/// Membership — evaluate a fuzzy number at crisp points.
///
/// Required methods
/// ----------------
/// - `degree(x)`: membership degree of a single point.
/// - `center()`: the point of maximal membership.
/// - `support()`: closed interval outside of which the degree is exactly
///   zero; shapes with unbounded tails report `(-∞, +∞)`.
/// - `family()`: short family name attached to transform diagnostics.
///
/// Provided methods
/// ----------------
/// - `degrees(xs)`: pointwise evaluation over a slice.
/// - `covered_degree(x, floor)`: `Some(degree(x))` when it exceeds `floor`.
///   Every transform kernel decides coverage through this method.
///
/// Invariants
/// ----------
/// - For validated shapes, `0 <= degree(x) <= 1` for every finite `x` and
///   `degree(center()) == 1`.
pub trait Membership {
    fn degree(&self, x: f64) -> f64;

    fn center(&self) -> f64;

    fn support(&self) -> (f64, f64);

    fn family(&self) -> &'static str;

    fn degrees(&self, xs: &[f64]) -> Array1<f64> {
        xs.iter().map(|&x| self.degree(x)).collect()
    }

    #[inline]
    fn covered_degree(&self, x: f64, floor: f64) -> Option<f64> {
        let mu = self.degree(x);
        (mu > floor).then_some(mu)
    }
}

impl<M: Membership + ?Sized> Membership for &M {
    fn degree(&self, x: f64) -> f64 {
        (**self).degree(x)
    }

    fn center(&self) -> f64 {
        (**self).center()
    }

    fn support(&self) -> (f64, f64) {
        (**self).support()
    }

    fn family(&self) -> &'static str {
        (**self).family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::{Gaussian, Triangular};
    use crate::transform::{TransformOptions, lower_transform, upper_transform};

    #[test]
    // Purpose
    // -------
    // Verify that `covered_degree` applies the floor strictly.
    //
    // Given
    // -----
    // - Triangle (0, 1, 2): degree 0.5 at x = 0.5, 0 at x = 2.
    //
    // Expect
    // ------
    // - Some(0.5) for floors below 0.5; None at floor 0.5 and at the foot.
    fn covered_degree_is_strict_above_floor() {
        // Arrange
        let t = Triangular::new(0.0, 1.0, 2.0).expect("valid triangle");

        // Act / Assert
        assert_eq!(t.covered_degree(0.5, 0.0), Some(0.5));
        assert_eq!(t.covered_degree(0.5, 0.4), Some(0.5));
        assert_eq!(t.covered_degree(0.5, 0.5), None);
        assert_eq!(t.covered_degree(2.0, 0.0), None);
    }

    #[test]
    // Purpose
    // -------
    // Check that a basis of borrowed shapes behaves like the owned basis.
    //
    // Given
    // -----
    // - Owned triangles (0,1,2), (1,2,3) and a `Vec<&Triangular>` over them.
    // - x = [0.5, 1, 1.5, 2, 2.5]; f = [2, 4, 6, 4, 2].
    //
    // Expect
    // ------
    // - Identical F↑ and F↓ from both bases; borrowed family names match.
    fn borrowed_basis_matches_owned_basis() {
        // Arrange
        let owned = vec![
            Triangular::new(0.0, 1.0, 2.0).expect("valid triangle"),
            Triangular::new(1.0, 2.0, 3.0).expect("valid triangle"),
        ];
        let borrowed: Vec<&Triangular> = owned.iter().collect();
        let x = [0.5, 1.0, 1.5, 2.0, 2.5];
        let f = [2.0, 4.0, 6.0, 4.0, 2.0];
        let opts = TransformOptions::default();

        // Act
        let up_owned = upper_transform(&owned, &x, &f, &opts).expect("valid");
        let up_borrowed = upper_transform(&borrowed, &x, &f, &opts).expect("valid");
        let down_owned = lower_transform(&owned, &x, &f, &opts).expect("valid");
        let down_borrowed = lower_transform(&borrowed, &x, &f, &opts).expect("valid");

        // Assert
        assert_eq!(up_owned, up_borrowed);
        assert_eq!(down_owned, down_borrowed);
        assert_eq!(borrowed[0].family(), "triangular");
        assert_eq!(borrowed[1].support(), (1.0, 3.0));
    }

    #[test]
    // Purpose
    // -------
    // Confirm `degrees` matches pointwise `degree` on an unbounded shape.
    //
    // Given
    // -----
    // - Gaussian center 0, sigma 1; xs = [-1, 0, 1].
    //
    // Expect
    // ------
    // - Elementwise equality and the "gaussian" family name.
    fn degrees_matches_pointwise_degree() {
        // Arrange
        let g = Gaussian::new(0.0, 1.0).expect("valid gaussian");
        let xs = [-1.0, 0.0, 1.0];

        // Act
        let ds = g.degrees(&xs);

        // Assert
        for (i, &x) in xs.iter().enumerate() {
            assert_eq!(ds[i], g.degree(x));
        }
        assert_eq!(g.family(), "gaussian");
    }
}
