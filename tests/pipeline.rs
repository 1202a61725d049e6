// End-to-end checks through the workspace facade, exercising the kernel
// the way the binary does.

#[macro_use] extern crate specnorm_assert_close;
extern crate specnorm;

use ::specnorm::kernel::{compute_spectral_norm, PowerIteration, Threading};

#[test]
fn default_workload() {
    // n = 130, 10 double-steps: the canonical answer for this workload
    let answer = compute_spectral_norm(130, Threading::Rayon).unwrap();
    assert_close!(abs=1e-4, answer, 1.2742);
}

#[test]
fn serial_and_parallel_agree_exactly() {
    for &n in &[1, 2, 3, 17, 130] {
        let serial = compute_spectral_norm(n, Threading::Serial).unwrap();
        let rayon = compute_spectral_norm(n, Threading::Rayon).unwrap();
        assert_eq!(serial.to_bits(), rayon.to_bits(), "n = {}", n);
    }
}

#[test]
fn intermediate_vectors_keep_their_length() {
    for &n in &[1, 2, 5, 31] {
        let (u, v) = PowerIteration::new(n, Threading::Serial).run();
        assert_eq!((u.len(), v.len()), (n, n));
    }
}

#[test]
fn bad_sizes_fail_before_any_work() {
    assert!(compute_spectral_norm(0, Threading::Serial).is_err());
}
