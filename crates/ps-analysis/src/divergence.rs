//! Separation between two trajectories of the same system.

use ps_core::State;

use crate::angle::angular_difference;
use crate::error::{AnalysisError, AnalysisResult};

/// Angular separation of component `index` at every point of two runs.
///
/// Both trajectories must come from the same time grid, so they must have the
/// same length. The separation is folded into `[0, π]`, see
/// [`angular_difference`].
pub fn divergence(a: &[State], b: &[State], index: usize) -> AnalysisResult<Vec<f64>> {
    if a.len() != b.len() {
        return Err(AnalysisError::LengthMismatch {
            what: "divergence trajectories",
            left: a.len(),
            right: b.len(),
        });
    }
    a.iter()
        .zip(b)
        .map(|(sa, sb)| -> AnalysisResult<f64> {
            Ok(angular_difference(sa.try_get(index)?, sb.try_get(index)?))
        })
        .collect()
}

/// Headline numbers of a divergence series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DivergenceSummary {
    pub initial: f64,
    pub max: f64,
    pub final_value: f64,
}

impl DivergenceSummary {
    /// Summarize a series, or `None` if it is empty.
    pub fn from_series(series: &[f64]) -> Option<Self> {
        let initial = *series.first()?;
        let final_value = *series.last()?;
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            initial,
            max,
            final_value,
        })
    }

    /// Ratio of the largest separation to the starting one.
    pub fn amplification(&self) -> f64 {
        self.max / self.initial
    }
}

/// Index of the first point whose separation exceeds `threshold`.
pub fn first_exceeding(series: &[f64], threshold: f64) -> Option<usize> {
    series.iter().position(|&d| d > threshold)
}
