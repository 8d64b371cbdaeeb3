// src/signal.rs

//! Synthetic test patterns for exercising the hardware: impulse, single tone,
//! and seeded uniform noise. Generated in floating point; quantization happens
//! at the file-encoding boundary.

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Default seed for reproducible noise vectors.
pub const DEFAULT_NOISE_SEED: u64 = 1234;

/// x[0] = 1.0, everything else zero.
pub fn impulse(n: usize) -> Vec<Complex64> {
    let mut signal = vec![Complex64::new(0.0, 0.0); n];
    if n > 0 {
        signal[0] = Complex64::new(1.0, 0.0);
    }
    signal
}

/// Real sine at bin `k`: `amp * sin(2*pi*k*i/n)`.
pub fn sine(n: usize, k: usize, amp: f64) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let phase = 2.0 * PI * k as f64 * i as f64 / n as f64;
            Complex64::new(amp * phase.sin(), 0.0)
        })
        .collect()
}

/// Real uniform noise in [-0.5, 0.5), reproducible from `seed`.
pub fn noise(n: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Complex64::new(rng.gen_range(-0.5..0.5), 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_impulse_shape() {
        let s = impulse(8);
        assert_eq!(s[0], Complex64::new(1.0, 0.0));
        assert!(s[1..].iter().all(|v| *v == Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_sine_hits_expected_samples() {
        let s = sine(8, 1, 0.5);
        assert_relative_eq!(s[0].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s[2].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(s[6].re, -0.5, epsilon = 1e-12);
        assert!(s.iter().all(|v| v.im == 0.0));
    }

    #[test]
    fn test_noise_is_reproducible_and_bounded() {
        let a = noise(64, DEFAULT_NOISE_SEED);
        let b = noise(64, DEFAULT_NOISE_SEED);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| v.re >= -0.5 && v.re < 0.5 && v.im == 0.0));
        assert_ne!(a, noise(64, 99));
    }
}
