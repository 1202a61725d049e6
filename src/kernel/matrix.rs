/* ************************************************************************ **
** This file is part of specnorm, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The implicit matrix and its two matrix-vector products.

use ::rayon::prelude::*;

/// The `(i, j)` entry of the matrix.
///
/// `1 / (tri(i + j) + i + 1)`, where `tri(s) = s (s + 1) / 2`.
///
/// The triangular number must be computed with integer floor division;
/// doing it in floats drifts from the exact denominator once `i + j`
/// gets large. The denominator is at least 1, so this is total.
#[inline]
pub fn matrix_element(i: usize, j: usize) -> f64 {
    let s = i + j;
    let tri = s * (s + 1) / 2;
    1.0 / (tri + i + 1) as f64
}

/// Computes one element of a matrix-vector product.
///
/// The closed set of impls (forward and transpose) stands in for the
/// function-valued argument threaded through the original formulation.
/// The matrix is not symmetric, so the two are materially different.
pub trait RowOperator: Sync {
    fn apply(&self, i: usize, u: &[f64]) -> f64;
}

/// `v[i] = Σ_j a(i, j) u[j]`
#[derive(Debug, Copy, Clone)]
pub struct Forward;

/// `v[i] = Σ_j a(j, i) u[j]`
#[derive(Debug, Copy, Clone)]
pub struct Transpose;

impl RowOperator for Forward {
    fn apply(&self, i: usize, u: &[f64]) -> f64 {
        // summation must run over j in increasing order; the rounding
        // behavior of left-to-right accumulation is part of the contract
        let mut sum = 0.0;
        for (j, &x) in u.iter().enumerate() {
            sum += matrix_element(i, j) * x;
        }
        sum
    }
}

impl RowOperator for Transpose {
    fn apply(&self, i: usize, u: &[f64]) -> f64 {
        let mut sum = 0.0;
        for (j, &x) in u.iter().enumerate() {
            sum += matrix_element(j, i) * x;
        }
        sum
    }
}

/// Whether a multiplication fans its output rows out across rayon's pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Threading {
    Serial,
    Rayon,
}

/// Applies a full matrix-vector product, producing a fresh vector.
///
/// Under `Threading::Rayon` the output index range is partitioned
/// disjointly across the pool; every row is still summed left to right,
/// so the result is bit-identical to the serial path. `collect` is the
/// join barrier: nothing downstream sees a partially-written vector.
pub fn multiply<Op: RowOperator>(op: &Op, u: &[f64], threading: Threading) -> Vec<f64> {
    match threading {
        Threading::Serial => (0..u.len()).map(|i| op.apply(i, u)).collect(),
        Threading::Rayon => (0..u.len()).into_par_iter().map(|i| op.apply(i, u)).collect(),
    }
}

/// The normal-equations operator `A^T A`, as two successive full passes.
///
/// Never fused and never expanded symbolically; the iteration is defined
/// in terms of these two O(n²) products.
pub fn multiply_at_a(u: &[f64], threading: Threading) -> Vec<f64> {
    multiply(&Transpose, &multiply(&Forward, u, threading), threading)
}

//--------------------------------------------------

#[test]
fn corner_elements() {
    assert_eq!(matrix_element(0, 0), 1.0);
    assert_eq!(matrix_element(0, 1), 0.5);
    assert_eq!(matrix_element(1, 0), 1.0 / 3.0);
    assert_eq!(matrix_element(1, 1), 1.0 / 5.0);
}

#[test]
fn elements_are_positive_and_bounded() {
    for i in 0..50 {
        for j in 0..50 {
            let value = matrix_element(i, j);
            assert!(0.0 < value && value <= 1.0, "a({}, {}) = {}", i, j, value);
        }
    }
}

#[test]
fn forward_and_transpose_differ() {
    // a(0, 1) != a(1, 0), so the two operators disagree already at n = 2
    let u = vec![1.0, 1.0];
    let forward = multiply(&Forward, &u, Threading::Serial);
    let transpose = multiply(&Transpose, &u, Threading::Serial);
    assert_eq!(forward, vec![1.0 + 0.5, 1.0 / 3.0 + 1.0 / 5.0]);
    assert_eq!(transpose, vec![1.0 + 1.0 / 3.0, 0.5 + 1.0 / 5.0]);
    assert_ne!(forward, transpose);
}

#[test]
fn products_preserve_length() {
    for n in 1..8 {
        let u = vec![1.0; n];
        assert_eq!(multiply(&Forward, &u, Threading::Serial).len(), n);
        assert_eq!(multiply(&Transpose, &u, Threading::Serial).len(), n);
        assert_eq!(multiply_at_a(&u, Threading::Serial).len(), n);
    }
}

#[test]
fn rayon_products_are_bit_identical() {
    fn check<Op: RowOperator>(op: &Op, u: &[f64]) {
        assert_eq!(
            multiply(op, u, Threading::Serial),
            multiply(op, u, Threading::Rayon),
        );
    }

    let u: Vec<f64> = (0..130).map(|i| 1.0 + (i as f64) / 7.0).collect();
    check(&Forward, &u);
    check(&Transpose, &u);
    assert_eq!(
        multiply_at_a(&u, Threading::Serial),
        multiply_at_a(&u, Threading::Rayon),
    );
}
