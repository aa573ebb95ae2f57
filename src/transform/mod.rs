//! transform — upper/lower fuzzy transforms and their inverses.
//!
//! Purpose
//! -------
//! Turn sampled data `(x_i, f_i)` into the component vectors of the upper
//! (F↑) and lower (F↓) fuzzy transforms with respect to a basis of fuzzy
//! numbers, and reconstruct approximations of `f` from those components.
//!
//! Key behaviors
//! -------------
//! - Generic routines over any [`Membership`](crate::membership::Membership)
//!   basis: [`upper_transform`], [`lower_transform`], [`inverse_upper`],
//!   [`inverse_lower`] and the `_many` array forms.
//! - Family entry points for the common parameterizations (triangular
//!   tuples, Gaussian centers with a shared σ, Bell centers with a shared
//!   width and slope) in [`families`].
//! - A fitted, reusable [`FuzzyTransform`] value.
//! - Shared validation ([`validate_samples`] and friends), options
//!   ([`TransformOptions`], [`LengthPolicy`]) and errors ([`TransformError`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public routine validates its inputs and reports failures via
//!   [`TransformResult`]; none panics on user input.
//! - Upper components are finite; lower components are finite or `+∞`.
//! - Reconstruction never produces NaN from `0 · ∞`; a `+∞` lower
//!   component contributes nothing to `f↓`.
//!
//! Conventions
//! -----------
//! - Component `k` always refers to `basis[k]`.
//! - Diagnostics go through `tracing` (`debug!` on fit, `trace!` per
//!   component, `warn!` for `+∞` components and truncated samples); the
//!   crate installs no subscriber.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use fuzzytrans::membership::Triangular;
//!   use fuzzytrans::transform::{FuzzyTransform, TransformOptions};
//!
//!   let basis = vec![Triangular::new(0.0, 1.0, 2.0)?, Triangular::new(1.0, 2.0, 3.0)?];
//!   let opts = TransformOptions::default();
//!   let ft = FuzzyTransform::fit(basis, &[0.5, 1.5, 2.5], &[1.0, 2.0, 1.0], opts)?;
//!   let approx_at_1 = ft.reconstruct_upper(1.0)?;
//!   # Ok::<(), Box<dyn std::error::Error>>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own branches; the crate's
//!   integration tests exercise fit → components → reconstruction on
//!   realistic sampled functions.

pub mod direct;
pub mod errors;
pub mod families;
pub mod inverse;
pub mod model;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::direct::{lower_transform, upper_transform};
pub use self::errors::{TransformError, TransformResult};
pub use self::families::{
    bell_inverse_lower, bell_inverse_upper, bell_lower, bell_upper, gaussian_inverse_lower,
    gaussian_inverse_upper, gaussian_lower, gaussian_upper, triangular_inverse_lower,
    triangular_inverse_upper, triangular_lower, triangular_upper,
};
pub use self::inverse::{inverse_lower, inverse_lower_many, inverse_upper, inverse_upper_many};
pub use self::model::FuzzyTransform;
pub use self::options::{LengthPolicy, TransformOptions};
pub use self::validation::{validate_basis, validate_components, validate_point, validate_samples};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        FuzzyTransform, LengthPolicy, TransformError, TransformOptions, TransformResult,
        inverse_lower, inverse_upper, lower_transform, upper_transform,
    };
}
