//! utils — conversion helpers for the Python boundary.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! is used by the `#[pyfunction]` wrappers in the crate root.
#[cfg(feature = "python-bindings")]
use pyo3::{
    IntoPyObjectExt,
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

/// Contiguous read-only float64 view of a sample array.
///
/// Accepts a numpy array, a pandas Series (through its `to_numpy` method),
/// or any Python sequence of floats; sequences are copied into a new array.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    let contiguous = |obj: &Bound<'py, PyAny>| {
        obj.extract::<PyReadonlyArray1<'py, f64>>().ok().filter(|arr| arr.as_slice().is_ok())
    };

    if let Some(arr) = contiguous(raw_data) {
        return Ok(arr);
    }
    let series = raw_data.call_method1("to_numpy", (false,)).ok();
    if let Some(arr) = series.as_ref().and_then(contiguous) {
        return Ok(arr);
    }

    let values: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("samples must be a 1-D float array, pandas Series, or float sequence")
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// Run `f` over the contiguous contents of an array-like argument.
#[cfg(feature = "python-bindings")]
pub fn with_f64_slice<'py, T>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, f: impl FnOnce(&[f64]) -> T,
) -> PyResult<T> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| PyValueError::new_err("array must be contiguous"))?;
    Ok(f(slice))
}

/// Evaluate a membership kernel on a Python float or array-like.
///
/// Returns a float for scalar input and a `numpy.ndarray` otherwise,
/// mirroring how the kernels broadcast in numpy code.
#[cfg(feature = "python-bindings")]
pub fn scalar_or_array<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, kernel: impl Fn(f64) -> f64,
) -> PyResult<PyObject> {
    if let Ok(value) = x.extract::<f64>() {
        return kernel(value).into_py_any(py);
    }
    let out: Vec<f64> = with_f64_slice(py, x, |xs| xs.iter().map(|&v| kernel(v)).collect())?;
    Ok(out.into_pyarray(py).into_any().unbind())
}
