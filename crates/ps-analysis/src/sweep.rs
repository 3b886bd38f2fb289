//! Parallel parameter sweeps.

use rayon::prelude::*;
use tracing::debug;

/// Run `run` once per parameter value on the rayon pool.
///
/// Each evaluation builds its own system and simulator, so runs share nothing
/// but `run` itself. Results come back in the order of `values`; the first
/// error aborts the sweep.
pub fn sweep<P, T, E, F>(values: &[P], run: F) -> Result<Vec<T>, E>
where
    P: Sync,
    T: Send,
    E: Send,
    F: Fn(&P) -> Result<T, E> + Sync + Send,
{
    debug!(points = values.len(), "starting sweep");
    let results = values.par_iter().map(run).collect::<Result<Vec<_>, _>>();
    debug!(ok = results.is_ok(), "sweep finished");
    results
}
