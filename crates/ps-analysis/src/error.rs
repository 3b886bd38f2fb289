//! Error types for trajectory analysis.

use ps_core::CoreError;
use ps_sim::SimError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch in {what}: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
