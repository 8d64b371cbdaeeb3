// src/twiddle.rs

//! Quantized twiddle factors W_N^k = exp(-j2*pi*k/N) for k = 0..N/2-1.
//!
//! The table is built once per transform length and read-only afterwards.
//! Entries are rounded to the nearest integer at the requested Q-format and
//! wrapped (not saturated) to 16 bits; for a well-formed N the only value
//! that can land outside Q1.15 is cos(0) = +1.0, which is pinned to 0x7FFF
//! so that the k = 0 rotation stays a (near-)identity.

use crate::common::{FftError, Result};
use crate::complex::ComplexQ15;
use crate::q15::Q15;
use crate::word;
use std::f64::consts::PI;

/// Read-only table of the N/2 rotation constants used by every stage.
#[derive(Debug, Clone)]
pub struct TwiddleTable {
    n: usize,
    entries: Vec<ComplexQ15>,
}

impl TwiddleTable {
    /// Builds the Q1.15 table for a transform of length `n`.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_frac_bits(n, Q15::FRAC_BITS)
    }

    /// Builds the table at an explicit Q1.`frac_bits` format.
    pub fn with_frac_bits(n: usize, frac_bits: u32) -> Result<Self> {
        if !n.is_power_of_two() {
            return Err(FftError::InvalidLength(n));
        }

        let scale = (1i64 << frac_bits) as f64;
        let entries = (0..n / 2)
            .map(|k| {
                let angle = -2.0 * PI * k as f64 / n as f64;
                ComplexQ15::new(
                    quantize(angle.cos(), scale),
                    quantize(angle.sin(), scale),
                )
            })
            .collect();

        Ok(Self { n, entries })
    }

    /// Transform length the table was built for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of tabulated entries (N/2).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up W_N^exponent. Only N/2 distinct twiddles are tabulated, so
    /// the exponent is reduced modulo N/2. The degenerate N = 1 table has no
    /// entries (a 1-point transform has no butterflies) and yields zero.
    #[inline]
    pub fn get(&self, exponent: usize) -> ComplexQ15 {
        match self.entries.len() {
            0 => ComplexQ15::ZERO,
            len => self.entries[exponent % len],
        }
    }

    pub fn entries(&self) -> &[ComplexQ15] {
        &self.entries
    }

    /// Packs the table into ROM words, entry k first.
    pub fn to_words(&self) -> Vec<u32> {
        self.entries
            .iter()
            .map(|e| word::encode_sample(*e))
            .collect()
    }
}

fn quantize(value: f64, scale: f64) -> Q15 {
    let bits = (value * scale).round_ties_even() as i64;
    // cos(0) rounds to +2^15, one past the top of Q1.15; store full scale
    // as 0x7FFF so W^0 keeps its sign. Nothing else can exceed the format.
    let bits = bits.min(Q15::MAX as i64);
    Q15::wrap(bits)
}
