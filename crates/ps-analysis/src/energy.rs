//! Energy bookkeeping for conservative and near-conservative runs.

use ps_core::State;

/// Evaluate `energy` at every point of a trajectory.
pub fn energy_series<F>(trajectory: &[State], energy: F) -> Vec<f64>
where
    F: Fn(&State) -> f64,
{
    trajectory.iter().map(energy).collect()
}

/// How far an energy series wandered from its first value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyDrift {
    pub initial: f64,
    pub min: f64,
    pub max: f64,
    /// Last value minus first value.
    pub net_change: f64,
}

impl EnergyDrift {
    pub fn from_series(series: &[f64]) -> Option<Self> {
        let initial = *series.first()?;
        let last = *series.last()?;
        let (min, max) = series
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
                (lo.min(e), hi.max(e))
            });
        Some(Self {
            initial,
            min,
            max,
            net_change: last - initial,
        })
    }

    /// Peak-to-peak excursion.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    /// Largest deviation from the initial value.
    pub fn max_deviation(&self) -> f64 {
        (self.max - self.initial).max(self.initial - self.min)
    }
}
