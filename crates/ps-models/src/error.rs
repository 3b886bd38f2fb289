//! Error types for model construction.

use ps_core::CoreError;
use ps_sim::SimError;
use thiserror::Error;

/// Errors raised while building a model from its parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Non-physical parameter: {what}")]
    NonPhysical { what: &'static str },

    #[error("Non-finite parameter {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<CoreError> for ModelError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => ModelError::NonFinite { what, value },
            CoreError::InvalidArg { what } => ModelError::NonPhysical { what },
            CoreError::IndexOob { what, .. } => ModelError::NonPhysical { what },
        }
    }
}

impl From<ModelError> for SimError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NonPhysical { what } => SimError::InvalidArg { what },
            ModelError::NonFinite { what, value } => {
                SimError::Core(CoreError::NonFinite { what, value })
            }
        }
    }
}

/// Ensure a parameter is finite.
pub(crate) fn check_finite(value: f64, what: &'static str) -> ModelResult<f64> {
    Ok(ps_core::ensure_finite(value, what)?)
}
