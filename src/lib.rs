//! fuzzytrans — fuzzy numbers and upper/lower fuzzy transforms.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the
//! `python-bindings` feature, as the PyO3 bridge that exposes the
//! membership kernels and the family transforms to Python via the
//! `_fuzzytrans` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`membership`] (triangular, Gaussian and
//!   Bell fuzzy numbers) and [`transform`] (F↑ / F↓ and their inverses).
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   `_fuzzytrans`, keeping the Python names `F_A_upT`, `f_A_downG`, … so
//!   existing research scripts keep working.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs
//!   only FFI glue, input conversion and error mapping.
//! - Membership kernels are evaluated without validation, as raw formulas;
//!   transform wrappers validate shapes and samples and raise `ValueError`
//!   on failure.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`ShapeError`] /
//!   [`TransformError`] and converted to `PyErr` at the boundary.
//! - Component vectors are returned to Python as lists; membership
//!   kernels return a float for scalar input and an `ndarray` otherwise.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`membership`] and [`transform`] directly
//!   and can ignore everything guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration tests under `tests/`. The PyO3 layer is thin
//!   and left to Python-side smoke tests.

pub mod membership;
pub mod transform;
pub mod utils;

pub use crate::membership::{
    Bell, FuzzyNumber, Gaussian, Membership, ShapeError, ShapeResult, Triangular, bell_function,
    gaussian_fuzzy_set, triangular_fuzzy_number,
};
pub use crate::transform::{
    FuzzyTransform, LengthPolicy, TransformError, TransformOptions, TransformResult,
};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    transform::families,
    utils::{scalar_or_array, with_f64_slice},
};

// ---- Membership kernels ----

/// Triangular membership `μ(x)` for `(a, b, c)`; `x` may be a float or array-like.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "triangular_fuzzy_number", signature = (a, b, c, x))]
fn py_triangular_fuzzy_number<'py>(
    py: Python<'py>, a: f64, b: f64, c: f64, x: &Bound<'py, PyAny>,
) -> PyResult<PyObject> {
    scalar_or_array(py, x, |v| triangular_fuzzy_number(a, b, c, v))
}

/// Gaussian membership `exp(−(x − c)² / 2σ²)`; `x` may be a float or array-like.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gaussian_fuzzy_set", signature = (x, sigma, c))]
fn py_gaussian_fuzzy_set<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, sigma: f64, c: f64,
) -> PyResult<PyObject> {
    scalar_or_array(py, x, |v| gaussian_fuzzy_set(v, sigma, c))
}

/// Generalized Bell membership `1 / (1 + |(x − c)/a|^(2b))`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "bell_function", signature = (x, a, b, c))]
fn py_bell_function<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, a: f64, b: f64, c: f64,
) -> PyResult<PyObject> {
    scalar_or_array(py, x, |v| bell_function(v, a, b, c))
}

// ---- Direct transforms ----

#[cfg(feature = "python-bindings")]
fn direct<'py>(
    py: Python<'py>, x_values: &Bound<'py, PyAny>, f_values: &Bound<'py, PyAny>,
    run: impl FnOnce(&[f64], &[f64]) -> TransformResult<ndarray::Array1<f64>>,
) -> PyResult<Vec<f64>> {
    let x = with_f64_slice(py, x_values, <[f64]>::to_vec)?;
    let components = with_f64_slice(py, f_values, |f| run(&x, f))??;
    Ok(components.to_vec())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "F_A_upT", signature = (params, x_values, f_values))]
fn py_triangular_upper<'py>(
    py: Python<'py>, params: Vec<(f64, f64, f64)>, x_values: &Bound<'py, PyAny>,
    f_values: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    direct(py, x_values, f_values, |x, f| families::triangular_upper(&params, x, f))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "F_A_downT", signature = (params, x_values, f_x_values))]
fn py_triangular_lower<'py>(
    py: Python<'py>, params: Vec<(f64, f64, f64)>, x_values: &Bound<'py, PyAny>,
    f_x_values: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    direct(py, x_values, f_x_values, |x, f| families::triangular_lower(&params, x, f))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "F_A_upG", signature = (centers, sigma, x_values, f_x_values))]
fn py_gaussian_upper<'py>(
    py: Python<'py>, centers: Vec<f64>, sigma: f64, x_values: &Bound<'py, PyAny>,
    f_x_values: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    direct(py, x_values, f_x_values, |x, f| families::gaussian_upper(&centers, sigma, x, f))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "F_A_downG", signature = (centers, sigma, x_values, f_x_values))]
fn py_gaussian_lower<'py>(
    py: Python<'py>, centers: Vec<f64>, sigma: f64, x_values: &Bound<'py, PyAny>,
    f_x_values: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    direct(py, x_values, f_x_values, |x, f| families::gaussian_lower(&centers, sigma, x, f))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "F_A_upB", signature = (centers, a, b, x_values, f_x_values))]
fn py_bell_upper<'py>(
    py: Python<'py>, centers: Vec<f64>, a: f64, b: f64, x_values: &Bound<'py, PyAny>,
    f_x_values: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    direct(py, x_values, f_x_values, |x, f| families::bell_upper(&centers, a, b, x, f))
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "F_A_downB", signature = (centers, a, b, x_values, f_x_values))]
fn py_bell_lower<'py>(
    py: Python<'py>, centers: Vec<f64>, a: f64, b: f64, x_values: &Bound<'py, PyAny>,
    f_x_values: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    direct(py, x_values, f_x_values, |x, f| families::bell_lower(&centers, a, b, x, f))
}

// ---- Inverse transforms ----

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "f_A_upT", signature = (x, F_A_up, params))]
#[allow(non_snake_case)]
fn py_triangular_inverse_upper(
    x: f64, F_A_up: Vec<f64>, params: Vec<(f64, f64, f64)>,
) -> PyResult<f64> {
    Ok(families::triangular_inverse_upper(x, &F_A_up, &params)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "f_A_downT", signature = (x, F_A_down, params))]
#[allow(non_snake_case)]
fn py_triangular_inverse_lower(
    x: f64, F_A_down: Vec<f64>, params: Vec<(f64, f64, f64)>,
) -> PyResult<f64> {
    Ok(families::triangular_inverse_lower(x, &F_A_down, &params)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "f_A_upG", signature = (x, F_A_up, sigma, centers))]
#[allow(non_snake_case)]
fn py_gaussian_inverse_upper(
    x: f64, F_A_up: Vec<f64>, sigma: f64, centers: Vec<f64>,
) -> PyResult<f64> {
    Ok(families::gaussian_inverse_upper(x, &F_A_up, sigma, &centers)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "f_A_downG", signature = (x, F_A_down, sigma, centers))]
#[allow(non_snake_case)]
fn py_gaussian_inverse_lower(
    x: f64, F_A_down: Vec<f64>, sigma: f64, centers: Vec<f64>,
) -> PyResult<f64> {
    Ok(families::gaussian_inverse_lower(x, &F_A_down, sigma, &centers)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "f_A_upB", signature = (x, F_A_up, centers, a, b))]
#[allow(non_snake_case)]
fn py_bell_inverse_upper(
    x: f64, F_A_up: Vec<f64>, centers: Vec<f64>, a: f64, b: f64,
) -> PyResult<f64> {
    Ok(families::bell_inverse_upper(x, &F_A_up, &centers, a, b)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "f_A_downB", signature = (x, F_A_down, centers, a, b))]
#[allow(non_snake_case)]
fn py_bell_inverse_lower(
    x: f64, F_A_down: Vec<f64>, centers: Vec<f64>, a: f64, b: f64,
) -> PyResult<f64> {
    Ok(families::bell_inverse_lower(x, &F_A_down, &centers, a, b)?)
}

/// `_fuzzytrans` — Python extension module initializer.
#[cfg(feature = "python-bindings")]
#[pymodule]
#[pyo3(name = "_fuzzytrans")]
fn fuzzytrans_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(py_triangular_fuzzy_number, m)?)?;
    m.add_function(wrap_pyfunction!(py_gaussian_fuzzy_set, m)?)?;
    m.add_function(wrap_pyfunction!(py_bell_function, m)?)?;

    m.add_function(wrap_pyfunction!(py_triangular_upper, m)?)?;
    m.add_function(wrap_pyfunction!(py_triangular_lower, m)?)?;
    m.add_function(wrap_pyfunction!(py_gaussian_upper, m)?)?;
    m.add_function(wrap_pyfunction!(py_gaussian_lower, m)?)?;
    m.add_function(wrap_pyfunction!(py_bell_upper, m)?)?;
    m.add_function(wrap_pyfunction!(py_bell_lower, m)?)?;

    m.add_function(wrap_pyfunction!(py_triangular_inverse_upper, m)?)?;
    m.add_function(wrap_pyfunction!(py_triangular_inverse_lower, m)?)?;
    m.add_function(wrap_pyfunction!(py_gaussian_inverse_upper, m)?)?;
    m.add_function(wrap_pyfunction!(py_gaussian_inverse_lower, m)?)?;
    m.add_function(wrap_pyfunction!(py_bell_inverse_upper, m)?)?;
    m.add_function(wrap_pyfunction!(py_bell_inverse_lower, m)?)?;
    Ok(())
}
