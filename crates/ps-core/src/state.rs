//! Phase-space state vector.

use core::ops::{Index, IndexMut};

use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// A fixed-dimension point in phase space.
///
/// The dimensionality is set at construction and never changes; integrators
/// write into the existing components and never push or pop. No arithmetic is
/// defined on `State` itself, all numeric combination happens inside systems
/// and integrators.
///
/// Integrators that split components into positions and velocities expect
/// interleaved pairs: even indices are generalized positions and odd indices
/// their velocities, e.g. `(θ, ω)` for a pendulum.
///
/// `state[i]` panics when `i >= len()`. Use [`State::get`] or
/// [`State::try_get`] for a checked read.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct State {
    values: Vec<Real>,
}

impl State {
    /// Create a state from an explicit ordered list of values.
    pub fn new(values: Vec<Real>) -> Self {
        Self { values }
    }

    /// Create a state of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Dimensionality of the state.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Real> {
        self.values.get(index).copied()
    }

    /// Checked read that reports the offending index instead of panicking.
    pub fn try_get(&self, index: usize) -> CoreResult<Real> {
        self.get(index).ok_or(CoreError::IndexOob {
            what: "state component",
            index,
            len: self.len(),
        })
    }

    /// Checked write; the dimensionality is left unchanged either way.
    pub fn try_set(&mut self, index: usize, value: Real) -> CoreResult<()> {
        let len = self.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CoreError::IndexOob {
                what: "state component",
                index,
                len,
            }),
        }
    }

    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Mutable view of the components. The slice cannot grow, so the
    /// dimensionality is preserved.
    pub fn values_mut(&mut self) -> &mut [Real] {
        &mut self.values
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Real> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<Real> {
        self.values
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl Index<usize> for State {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        let len = self.values.len();
        match self.values.get(index) {
            Some(v) => v,
            None => panic!("state index {index} out of range for dimension {len}"),
        }
    }
}

impl IndexMut<usize> for State {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(v) => v,
            None => panic!("state index {index} out of range for dimension {len}"),
        }
    }
}

impl From<Vec<Real>> for State {
    fn from(values: Vec<Real>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[Real; N]> for State {
    fn from(values: [Real; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<&[Real]> for State {
    fn from(values: &[Real]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Real;
    type IntoIter = core::slice::Iter<'a, Real>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
