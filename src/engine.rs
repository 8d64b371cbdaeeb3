// src/engine.rs

//! Radix-2 decimation-in-time butterfly engine.
//!
//! The schedule is the hardware address-generation scheme: for stage
//! s = 0..log2(N)-1, butterflies pair slots `a = g*group_size + j` and
//! `b = a + stride` with twiddle exponent `j * tw_step`. Within a stage every
//! (g, j) pair touches disjoint slots, so butterflies of one stage commute;
//! only stage order carries a data dependency.
//!
//! [`DitFft::process`] takes a natural-order buffer, applies the bit-reversal
//! permutation, then runs the stages, leaving natural-order bins.
//! [`DitFft::run_stages`] skips the permutation for callers whose data is
//! already bit-reversed, mirroring a hardware input stage fed that way.

use crate::bitrev;
use crate::common::{FftError, FftProcess, Result};
use crate::complex::ComplexQ15;
use crate::twiddle::TwiddleTable;

/// Derived per-stage addressing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    /// Distance between the two legs of a butterfly: 2^stage.
    pub stride: usize,
    /// Slots spanned by one group: 2 * stride.
    pub group_size: usize,
    /// Number of groups in the buffer: N / group_size.
    pub num_groups: usize,
    /// Twiddle exponent step per j: N / group_size.
    pub tw_step: usize,
}

/// One butterfly's addresses and twiddle exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Butterfly {
    pub a: usize,
    pub b: usize,
    pub exponent: usize,
}

impl StageDescriptor {
    /// Addressing parameters for `stage` of an N-point transform.
    pub fn for_stage(n: usize, stage: u32) -> Self {
        let stride = 1usize << stage;
        let group_size = stride << 1;
        Self {
            stride,
            group_size,
            num_groups: n / group_size,
            tw_step: n / group_size,
        }
    }

    /// Enumerates the stage's butterflies in canonical (g, j) nested order.
    pub fn butterflies(&self) -> impl Iterator<Item = Butterfly> + '_ {
        let stride = self.stride;
        let group_size = self.group_size;
        let tw_step = self.tw_step;
        (0..self.num_groups).flat_map(move |g| {
            let base = g * group_size;
            (0..stride).map(move |j| Butterfly {
                a: base + j,
                b: base + j + stride,
                exponent: j * tw_step,
            })
        })
    }
}

/// The elementary butterfly: `t = b*w; (a + t, a - t)`.
///
/// Both outputs are computed from the pre-update value of `a`. All arithmetic
/// wraps to 16 bits.
#[inline]
pub fn butterfly(a: ComplexQ15, b: ComplexQ15, w: ComplexQ15) -> (ComplexQ15, ComplexQ15) {
    let t = b * w;
    (a + t, a - t)
}

/// Fixed-point DIT FFT with precomputed twiddle and bit-reversal tables.
#[derive(Debug, Clone)]
pub struct DitFft {
    n: usize,
    num_stages: u32,
    twiddles: TwiddleTable,
    bitrev: Vec<usize>,
}

impl DitFft {
    /// Builds the engine for an N-point transform. N must be a power of two.
    pub fn new(n: usize) -> Result<Self> {
        let bitrev = bitrev::bit_reverse_indices(n)?;
        let twiddles = TwiddleTable::new(n)?;
        Ok(Self {
            n,
            num_stages: n.trailing_zeros(),
            twiddles,
            bitrev,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn num_stages(&self) -> u32 {
        self.num_stages
    }

    pub fn twiddles(&self) -> &TwiddleTable {
        &self.twiddles
    }

    /// Transforms a natural-order buffer in place to natural-order bins.
    pub fn process(&self, buffer: &mut [ComplexQ15]) -> Result<()> {
        self.check_len(buffer)?;
        bitrev::permute_in_place(buffer, &self.bitrev);
        self.run_stages(buffer)
    }

    /// Runs all butterfly stages without the input permutation. The buffer
    /// must already be in bit-reversed order; bins come out natural.
    pub fn run_stages(&self, buffer: &mut [ComplexQ15]) -> Result<()> {
        self.check_len(buffer)?;
        for stage in 0..self.num_stages {
            self.run_stage(buffer, stage);
        }
        Ok(())
    }

    /// Runs a single stage over the buffer in place.
    pub fn run_stage(&self, buffer: &mut [ComplexQ15], stage: u32) {
        debug_assert!(stage < self.num_stages);
        let desc = StageDescriptor::for_stage(self.n, stage);
        for bf in desc.butterflies() {
            let w = self.twiddles.get(bf.exponent);
            let (x, y) = butterfly(buffer[bf.a], buffer[bf.b], w);
            buffer[bf.a] = x;
            buffer[bf.b] = y;
        }
    }

    fn check_len(&self, buffer: &[ComplexQ15]) -> Result<()> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch {
                expected: self.n,
                actual: buffer.len(),
            });
        }
        Ok(())
    }
}

impl FftProcess<ComplexQ15> for DitFft {
    fn process(&self, buffer: &mut [ComplexQ15]) -> Result<()> {
        DitFft::process(self, buffer)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
