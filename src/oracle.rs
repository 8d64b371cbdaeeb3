// src/oracle.rs

//! Floating-point DFT used as an independent cross-check.
//!
//! This is a thin wrapper over `rustfft`; the golden model itself never
//! computes in floating point. The oracle returns the unnormalized DFT with
//! no quantization; callers quantize at the file boundary if they need
//! apples-to-apples numbers against the fixed-point engine.

use crate::common::{FftError, FftProcess, Result};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// Reference transform of a fixed length.
pub struct FloatFft {
    n: usize,
    fft: Arc<dyn Fft<f64>>,
}

impl FloatFft {
    pub fn new(n: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            n,
            fft: planner.plan_fft_forward(n),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Unnormalized forward DFT in place, natural order in and out.
    pub fn process(&self, buffer: &mut [Complex64]) -> Result<()> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch {
                expected: self.n,
                actual: buffer.len(),
            });
        }
        self.fft.process(buffer);
        Ok(())
    }
}

impl fmt::Debug for FloatFft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatFft").field("n", &self.n).finish()
    }
}

impl FftProcess<Complex64> for FloatFft {
    fn process(&self, buffer: &mut [Complex64]) -> Result<()> {
        FloatFft::process(self, buffer)
    }
}

/// One-shot convenience: DFT of `input` as a new buffer.
pub fn dft(input: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    FftPlanner::new()
        .plan_fft_forward(buffer.len())
        .process(&mut buffer);
    buffer
}
