// FFI Facade: The main entry point for Python.
// This file uses `pyo3` to define the `_core` Python
// module and expose Rust structs and functions as Python objects.

use pyo3::prelude::*;

pub mod audit;
pub mod bindings;
pub mod display;
pub mod logic;
pub mod verification;

// Re-export the primary API at the crate root.
pub use logic::{Proposition, PropositionType, Quality, Quantity, Syllogism, Term};
pub use verification::{verify, RuleCode, TermRoles, Verdict, Verifier, Violation};

use bindings::python::{audit_chain_json, PySyllogism, PyVerdict};

/// A simple function to confirm the Rust core is callable from Python.
#[pyfunction]
fn rust_core_version() -> &'static str {
    "0.1.0"
}

// --- Module Definition ---
/// This function defines the `syllogist._core` Python module.
/// The name `_core` is chosen to indicate it's an internal, compiled component.
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySyllogism>()?;
    m.add_class::<PyVerdict>()?;
    m.add_function(wrap_pyfunction!(rust_core_version, m)?)?;
    m.add_function(wrap_pyfunction!(audit_chain_json, m)?)?;
    Ok(())
}
