//! transform::inverse — reconstruction from upper/lower components.
//!
//! Purpose
//! -------
//! Evaluate the inverse fuzzy transforms, which turn component vectors back
//! into functions of `x`:
//!
//! - from lower components: `f↓(x) = max_k A_k(x) · F↓[k]`,
//! - from upper components: `f↑(x) = min_k F↑[k] / A_k(x)`.
//!
//! Key behaviors
//! -------------
//! - In `f↓`, a term contributes `0` when `A_k(x) <= floor` or when
//!   `F↓[k] = +∞`. An infinite component carries no finite lower bound, so
//!   it never yields `0 · ∞ = NaN` nor an infinite `f↓`.
//! - In `f↑`, only terms with `A_k(x) > floor` take part; if no basis
//!   element covers `x` the result is `+∞`.
//!
//! Invariants & assumptions
//! ------------------------
//! - For non-negative `f` and samples covered by the basis,
//!   `f↓(x_i) <= f_i <= f↑(x_i)` at every sample point.
//!
//! Testing notes
//! -------------
//! - Unit tests cover hand-computed reconstructions, uncovered points, the
//!   `+∞` component case and the array forms.
use ndarray::Array1;

use crate::{
    membership::Membership,
    transform::{
        errors::TransformResult,
        options::TransformOptions,
        validation::{validate_components, validate_point},
    },
};

/// Reconstruct `f↑(x)` from upper components.
///
/// Parameters
/// ----------
/// - `basis`: `&[M]`
///   The basis the components were computed against.
/// - `upper`: `&[f64]`
///   Components `F↑`, one per basis element.
/// - `x`: `f64`
///   Finite evaluation point.
/// - `opts`: `&TransformOptions`
///   Supplies the membership floor.
///
/// Returns
/// -------
/// `TransformResult<f64>`
///   `min_k F↑[k] / A_k(x)` over covering elements, or `+∞` if none covers `x`.
///
/// Errors
/// ------
/// - `EmptyBasis`, `ComponentLengthMismatch`, `NaNComponent`,
///   `NonFiniteEvaluationPoint`.
pub fn inverse_upper<M: Membership>(
    basis: &[M], upper: &[f64], x: f64, opts: &TransformOptions,
) -> TransformResult<f64> {
    validate_components(basis.len(), upper)?;
    validate_point(x)?;
    Ok(upper_at(basis, upper, x, opts.floor))
}

/// Reconstruct `f↓(x)` from lower components.
///
/// Returns `max_k A_k(x) · F↓[k]`, with uncovered terms and `+∞` components
/// contributing `0`.
/// Errors are the same as for [`inverse_upper`].
pub fn inverse_lower<M: Membership>(
    basis: &[M], lower: &[f64], x: f64, opts: &TransformOptions,
) -> TransformResult<f64> {
    validate_components(basis.len(), lower)?;
    validate_point(x)?;
    Ok(lower_at(basis, lower, x, opts.floor))
}

/// Evaluate [`inverse_upper`] at every point of `xs`.
///
/// Errors
/// ------
/// - As for [`inverse_upper`]; the first non-finite point aborts the call.
pub fn inverse_upper_many<M: Membership>(
    basis: &[M], upper: &[f64], xs: &[f64], opts: &TransformOptions,
) -> TransformResult<Array1<f64>> {
    validate_components(basis.len(), upper)?;
    xs.iter()
        .map(|&x| {
            validate_point(x)?;
            Ok(upper_at(basis, upper, x, opts.floor))
        })
        .collect()
}

/// Evaluate [`inverse_lower`] at every point of `xs`.
pub fn inverse_lower_many<M: Membership>(
    basis: &[M], lower: &[f64], xs: &[f64], opts: &TransformOptions,
) -> TransformResult<Array1<f64>> {
    validate_components(basis.len(), lower)?;
    xs.iter()
        .map(|&x| {
            validate_point(x)?;
            Ok(lower_at(basis, lower, x, opts.floor))
        })
        .collect()
}

// ---- Kernels (inputs already validated) ----

pub(crate) fn upper_at<'c, M: Membership>(
    basis: &[M], upper: impl IntoIterator<Item = &'c f64>, x: f64, floor: f64,
) -> f64 {
    basis
        .iter()
        .zip(upper)
        .filter_map(|(a, &big_f)| a.covered_degree(x, floor).map(|mu| big_f / mu))
        .fold(f64::INFINITY, f64::min)
}

pub(crate) fn lower_at<'c, M: Membership>(
    basis: &[M], lower: impl IntoIterator<Item = &'c f64>, x: f64, floor: f64,
) -> f64 {
    basis
        .iter()
        .zip(lower)
        .map(|(a, &big_f)| match a.covered_degree(x, floor) {
            Some(mu) if big_f.is_finite() => mu * big_f,
            _ => 0.0,
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::{Bell, Triangular};
    use crate::transform::errors::TransformError;
    use approx::assert_relative_eq;

    fn two_triangles() -> Vec<Triangular> {
        vec![
            Triangular::new(0.0, 1.0, 2.0).expect("valid triangle"),
            Triangular::new(1.0, 2.0, 3.0).expect("valid triangle"),
        ]
    }

    #[test]
    // Purpose
    // -------
    // Verify both reconstructions against hand-computed values.
    //
    // Given
    // -----
    // - Basis (0,1,2), (1,2,3); F↑ = [4, 6]; F↓ = [2, 3]; x = 1.5.
    // - Degrees at 1.5: [0.5, 0.5].
    //
    // Expect
    // ------
    // - f↑(1.5) = min(4/0.5, 6/0.5) = 8.
    // - f↓(1.5) = max(0.5·2, 0.5·3) = 1.5.
    fn inverse_matches_hand_computed_values() {
        // Arrange
        let basis = two_triangles();
        let opts = TransformOptions::default();

        // Act
        let up = inverse_upper(&basis, &[4.0, 6.0], 1.5, &opts).expect("valid");
        let down = inverse_lower(&basis, &[2.0, 3.0], 1.5, &opts).expect("valid");

        // Assert
        assert_relative_eq!(up, 8.0, epsilon = 1e-12);
        assert_relative_eq!(down, 1.5, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure uncovered points give f↑ = +∞ and f↓ = 0.
    //
    // Given
    // -----
    // - Basis (0,1,2), (1,2,3) evaluated at x = 10.
    //
    // Expect
    // ------
    // - f↑(10) = +∞, f↓(10) = 0.
    fn inverse_at_uncovered_point() {
        // Arrange
        let basis = two_triangles();
        let opts = TransformOptions::default();

        // Act
        let up = inverse_upper(&basis, &[4.0, 6.0], 10.0, &opts).expect("valid");
        let down = inverse_lower(&basis, &[2.0, 3.0], 10.0, &opts).expect("valid");

        // Assert
        assert_eq!(up, f64::INFINITY);
        assert_eq!(down, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Check that a +∞ lower component with zero membership does not yield NaN.
    //
    // Given
    // -----
    // - Basis (0,1,2), (10,11,12); F↓ = [2, +∞]; x = 1.
    //
    // Expect
    // ------
    // - f↓(1) = 2 (the second term contributes 0, not NaN).
    fn inverse_lower_skips_infinite_uncovered_component() {
        // Arrange
        let basis = vec![
            Triangular::new(0.0, 1.0, 2.0).expect("valid triangle"),
            Triangular::new(10.0, 11.0, 12.0).expect("valid triangle"),
        ];

        // Act
        let down =
            inverse_lower(&basis, &[2.0, f64::INFINITY], 1.0, &TransformOptions::default())
                .expect("valid");

        // Assert
        assert_eq!(down, 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Check that a +∞ lower component contributes 0 even where it covers x.
    //
    // Given
    // -----
    // - Basis (0,1,2), (0.5,1.5,2.5); F↓ = [2, +∞]; x = 1.
    // - The second element covers x with degree 0.5.
    //
    // Expect
    // ------
    // - f↓(1) = 2, not +∞; a lone +∞ component gives f↓ = 0.
    fn inverse_lower_ignores_infinite_covered_component() {
        // Arrange
        let basis = vec![
            Triangular::new(0.0, 1.0, 2.0).expect("valid triangle"),
            Triangular::new(0.5, 1.5, 2.5).expect("valid triangle"),
        ];
        let opts = TransformOptions::default();

        // Act
        let down = inverse_lower(&basis, &[2.0, f64::INFINITY], 1.0, &opts).expect("valid");
        let lone = inverse_lower(&basis[1..], &[f64::INFINITY], 1.0, &opts).expect("valid");

        // Assert
        assert_eq!(down, 2.0);
        assert_eq!(lone, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the array forms agree with the scalar forms on a Bell basis.
    //
    // Given
    // -----
    // - Bell centers [0, 2], a = 1, b = 2; F↑ = [3, 5]; F↓ = [1, 2]; xs on [−1, 3].
    //
    // Expect
    // ------
    // - Elementwise equality with `inverse_upper` / `inverse_lower`.
    fn inverse_many_agrees_with_scalar_forms() {
        // Arrange
        let basis = Bell::with_shared_shape(&[0.0, 2.0], 1.0, 2.0).expect("valid basis");
        let xs = [-1.0, -0.25, 0.5, 1.0, 1.75, 3.0];
        let opts = TransformOptions::default();

        // Act
        let ups = inverse_upper_many(&basis, &[3.0, 5.0], &xs, &opts).expect("valid");
        let downs = inverse_lower_many(&basis, &[1.0, 2.0], &xs, &opts).expect("valid");

        // Assert
        for (i, &x) in xs.iter().enumerate() {
            let up = inverse_upper(&basis, &[3.0, 5.0], x, &opts).expect("valid");
            let down = inverse_lower(&basis, &[1.0, 2.0], x, &opts).expect("valid");
            assert_eq!(ups[i], up);
            assert_eq!(downs[i], down);
        }
    }

    #[test]
    // Purpose
    // -------
    // Cover the validation errors of the inverse entry points.
    //
    // Given
    // -----
    // - Mismatched component length; a NaN evaluation point inside `xs`.
    //
    // Expect
    // ------
    // - `ComponentLengthMismatch` and `NonFiniteEvaluationPoint`.
    fn inverse_rejects_bad_components_and_points() {
        // Arrange
        let basis = two_triangles();
        let opts = TransformOptions::default();

        // Act
        let short = inverse_upper(&basis, &[1.0], 0.5, &opts);
        let bad_point = inverse_lower_many(&basis, &[1.0, 1.0], &[0.5, f64::NAN], &opts);

        // Assert
        assert_eq!(short, Err(TransformError::ComponentLengthMismatch { expected: 2, actual: 1 }));
        assert!(matches!(bad_point, Err(TransformError::NonFiniteEvaluationPoint { .. })));
    }
}
