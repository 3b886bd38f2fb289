//! Stroboscopic (Poincaré) sampling of a recorded run.

use ps_sim::SimRecord;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};

/// Sample `record` once per `period`.
///
/// For `k = 1, 2, ...` the first point with `t >= k·period` is kept. After a
/// sample at time `t` the next target is `(floor(t / period) + 1)·period`, so
/// a coarse record never yields two samples for the same period. Points
/// before the first full period are skipped.
///
/// For a driven pendulum pass the drive period `2π/Ω_D`: a periodic orbit
/// collapses to a handful of points while a chaotic one fills out a strange
/// attractor.
pub fn poincare_section(record: &SimRecord, period: f64) -> AnalysisResult<SimRecord> {
    if !(period.is_finite() && period > 0.0) {
        return Err(AnalysisError::InvalidArg {
            what: "poincare period must be positive and finite",
        });
    }
    if record.t.len() != record.x.len() {
        return Err(AnalysisError::LengthMismatch {
            what: "record times and states",
            left: record.t.len(),
            right: record.x.len(),
        });
    }

    let mut section = SimRecord::default();
    let mut next = period;
    for (t, state) in record.iter() {
        if t >= next {
            section.push(t, state.clone());
            next = ((t / period).floor() + 1.0) * period;
        }
    }

    debug!(
        period,
        input = record.len(),
        sampled = section.len(),
        "poincare section"
    );
    Ok(section)
}
