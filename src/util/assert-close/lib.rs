//! Approximate float comparison for tests.

#[macro_use]
extern crate failure;
use std::fmt;

pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// Asserts that two values (scalars or float sequences) are close.
///
/// `rel=` and `abs=` tolerances may each be given, in that order;
/// defaults are `rel=1e-9, abs=0.0`.
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr $(,)?)
    => { $crate::assert_close!{rel=$crate::DEFAULT_REL_TOL, abs=0.0, $a, $b} };

    (rel=$rel:expr, $a:expr, $b:expr $(,)?)
    => { $crate::assert_close!{rel=$rel, abs=0.0, $a, $b} };

    (abs=$abs:expr, $a:expr, $b:expr $(,)?)
    => { $crate::assert_close!{rel=$crate::DEFAULT_REL_TOL, abs=$abs, $a, $b} };

    (rel=$rel:expr, abs=$abs:expr, $a:expr, $b:expr $(,)?)
    => {{
        let a = $a;
        let b = $b;
        let tol = $crate::Tolerances { abs: $abs, rel: $rel };
        if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
            panic!(
                "not nearly equal! (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                tol.rel, tol.abs, a, b, e);
        }
    }};
}

#[derive(Debug, Copy, Clone)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        let (a, b) = (*self, *other);
        assert!(tol.rel >= 0.0);
        assert!(tol.abs >= 0.0);

        // comparison strategy from Python's math.isclose;
        // the equality test catches infinities of the same sign
        let close = a == b || {
            !a.is_infinite() && !b.is_infinite()
                && (a - b).abs() < tol.abs.max(tol.rel * a.abs()).max(tol.rel * b.abs())
        };
        if close {
            Ok(())
        } else {
            Err(CheckCloseError { values: (a, b), tol })
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        CheckClose::check_close(*self, *other, tol)
    }
}

impl CheckClose for [f64] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl CheckClose for Vec<f64> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        (self[..]).check_close(&other[..], tol)
    }
}

impl CheckClose<[f64]> for Vec<f64> {
    fn check_close(&self, other: &[f64], tol: Tolerances) -> Result<(), CheckCloseError> {
        (self[..]).check_close(other, tol)
    }
}

impl CheckClose<Vec<f64>> for [f64] {
    fn check_close(&self, other: &Vec<f64>, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.check_close(&other[..], tol)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, vec![1.0], vec![1.0]);
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(rel=0.0, abs=0.0, 1.0, 1.1);
    }

    #[test]
    fn absolute_tolerance() {
        assert_close!(abs=0.2, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn opposite_infinities() {
        assert_close!(::std::f64::INFINITY, ::std::f64::NEG_INFINITY);
    }
}
