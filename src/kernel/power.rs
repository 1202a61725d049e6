/* ************************************************************************ **
** This file is part of specnorm, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-count power iteration and the Rayleigh-quotient estimate.

use crate::{FailResult, DegenerateNorm, ITERATIONS};
use crate::matrix::{multiply_at_a, Threading};

/// Power iteration over the normal-equations operator.
///
/// Starts from the all-ones vector and alternates
/// `v = AtA(u); u = AtA(v)` for exactly [`ITERATIONS`] double-steps.
/// There is no convergence check and no early exit.
#[derive(Debug, Copy, Clone)]
pub struct PowerIteration {
    n: usize,
    threading: Threading,
}

impl PowerIteration {
    /// # Panics
    ///
    /// Panics if `n` is zero. Size validation belongs to the entry
    /// point ([`crate::compute_spectral_norm`]), which reports it as an
    /// error instead; by the time an iteration exists the size is good.
    pub fn new(n: usize, threading: Threading) -> Self {
        assert!(n > 0, "caller must reject empty sizes");
        PowerIteration { n, threading }
    }

    /// Runs the iteration to completion, returning the final `(u, v)` pair.
    pub fn run(&self) -> (Vec<f64>, Vec<f64>) {
        let mut u = vec![1.0; self.n];
        let mut v = vec![0.0; self.n]; // overwritten on the first step
        for step in 0..ITERATIONS {
            v = multiply_at_a(&u, self.threading);
            u = multiply_at_a(&v, self.threading);
            trace!("power iteration double-step {} of {}", step + 1, ITERATIONS);
        }
        (u, v)
    }
}

/// Estimates the spectral norm from the final iterated pair.
///
/// `sqrt((u . v) / (v . v))`; the eigenvalues of `A^T A` are the squares
/// of the singular values of `A`, hence the square root.
pub fn estimate_norm(u: &[f64], v: &[f64]) -> FailResult<f64> {
    assert_eq!(u.len(), v.len());
    let mut ubv = 0.0;
    let mut vv = 0.0;
    for (&ue, &ve) in u.iter().zip(v) {
        ubv += ue * ve;
        vv += ve * ve;
    }
    // cannot happen for vectors produced by the iteration (all matrix
    // entries are positive), but a zero denominator must be reported
    // rather than quietly propagating NaN
    if vv == 0.0 {
        return Err(DegenerateNorm.into());
    }
    Ok((ubv / vv).sqrt())
}

//--------------------------------------------------

#[test]
fn all_ones_is_a_fixed_point_at_size_one() {
    let (u, v) = PowerIteration::new(1, Threading::Serial).run();
    assert_eq!(u, vec![1.0]);
    assert_eq!(v, vec![1.0]);
    assert_eq!(estimate_norm(&u, &v).unwrap(), 1.0);
}

#[test]
fn final_pair_has_the_requested_length() {
    for n in 1..6 {
        let (u, v) = PowerIteration::new(n, Threading::Serial).run();
        assert_eq!(u.len(), n);
        assert_eq!(v.len(), n);
    }
}

#[test]
fn iterated_vectors_are_reproducible() {
    let a = PowerIteration::new(19, Threading::Serial).run();
    let b = PowerIteration::new(19, Threading::Serial).run();
    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "reject empty sizes")]
fn empty_size_panics() {
    let _ = PowerIteration::new(0, Threading::Serial);
}

#[test]
fn zero_denominator_is_reported() {
    let err = estimate_norm(&[0.0, 0.0], &[0.0, 0.0]).unwrap_err();
    assert!(err.to_string().contains("degenerate norm"), "{}", err);
}
