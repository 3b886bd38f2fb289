//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while stepping a system.
///
/// None of these are transient: each one means the system, integrator and
/// state were wired together inconsistently, so nothing is ever retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported state layout for {integrator}: {what}")]
    Layout {
        integrator: &'static str,
        what: &'static str,
    },

    #[error("Core error: {0}")]
    Core(#[from] ps_core::CoreError),
}

pub type SimResult<T> = Result<T, SimError>;

/// Fail unless `actual` has the dimensionality `expected`.
pub fn ensure_dimension(what: &'static str, expected: usize, actual: usize) -> SimResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(SimError::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Fail if a step left the time unchanged, as happens once `dt` falls below
/// the float spacing at `t`.
pub fn ensure_time_advanced(before: f64, after: f64) -> SimResult<()> {
    if after > before {
        Ok(())
    } else {
        Err(SimError::InvalidArg {
            what: "dt too small to advance time",
        })
    }
}
