use crate::CoreError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// Absolute + relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Same absolute and relative tolerance.
    pub const fn uniform(tol: Real) -> Self {
        Self { abs: tol, rel: tol }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Ensure a value is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_uniform_scales_with_magnitude() {
        let tol = Tolerances::uniform(1e-6);
        assert!(nearly_equal(1.0e6, 1.0e6 + 0.5, tol));
        assert!(!nearly_equal(1.0, 1.1, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_infinity() {
        assert!(ensure_positive(9.8, "l").is_ok());
        assert_eq!(
            ensure_positive(0.0, "l"),
            Err(CoreError::InvalidArg { what: "l" })
        );
        assert!(matches!(
            ensure_positive(Real::INFINITY, "l"),
            Err(CoreError::NonFinite { .. })
        ));
    }
}
