// src/compare.rs

//! Numeric comparator between a golden reference and a candidate (DUT)
//! sequence, both already dequantized to floating magnitude.
//!
//! Sequences of different length are truncated to the shorter one with a
//! warning rather than rejected. Error statistics are always fully computed;
//! a tolerance violation additionally captures the first few samples for
//! debugging. Nothing here mutates its inputs.

use num_complex::Complex64;
use std::fmt;
use tracing::warn;

/// Tolerance for float-domain comparisons.
pub const FLOAT_TOLERANCE: f64 = 1e-6;

/// One Q1.15 quantization step; the right tolerance when both sides went
/// through the same fixed-point pipeline.
pub const Q15_STEP: f64 = 1.0 / 32768.0;

/// Number of leading samples dumped when the tolerance is exceeded.
const DUMP_LEN: usize = 8;

/// One sample's worth of debugging context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleDiff {
    pub index: usize,
    pub reference: Complex64,
    pub candidate: Complex64,
    pub diff: Complex64,
}

/// Structured result of a comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Number of samples actually compared (after any truncation).
    pub len: usize,
    pub max_err: f64,
    pub mean_err: f64,
    pub rms_err: f64,
    pub tolerance: f64,
    /// Original (reference, candidate) lengths when they disagreed.
    pub truncated: Option<(usize, usize)>,
    /// First samples, captured only on a tolerance violation.
    pub head: Vec<SampleDiff>,
}

impl ComparisonReport {
    pub fn within_tolerance(&self) -> bool {
        self.max_err <= self.tolerance
    }
}

/// Compares `candidate` against `reference` elementwise on absolute
/// (magnitude) error.
pub fn compare(
    reference: &[Complex64],
    candidate: &[Complex64],
    tolerance: f64,
) -> ComparisonReport {
    let mut truncated = None;
    if reference.len() != candidate.len() {
        warn!(
            reference = reference.len(),
            candidate = candidate.len(),
            "length mismatch, truncating to the shorter sequence"
        );
        truncated = Some((reference.len(), candidate.len()));
    }
    let len = reference.len().min(candidate.len());
    let reference = &reference[..len];
    let candidate = &candidate[..len];

    let mut max_err = 0.0f64;
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    for (r, c) in reference.iter().zip(candidate) {
        let e = (r - c).norm();
        max_err = max_err.max(e);
        sum += e;
        sum_sq += e * e;
    }
    let (mean_err, rms_err) = if len == 0 {
        (0.0, 0.0)
    } else {
        (sum / len as f64, (sum_sq / len as f64).sqrt())
    };

    let head = if max_err > tolerance {
        reference
            .iter()
            .zip(candidate)
            .take(DUMP_LEN)
            .enumerate()
            .map(|(index, (r, c))| SampleDiff {
                index,
                reference: *r,
                candidate: *c,
                diff: r - c,
            })
            .collect()
    } else {
        Vec::new()
    };

    ComparisonReport {
        len,
        max_err,
        mean_err,
        rms_err,
        tolerance,
        truncated,
        head,
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison between reference and DUT:")?;
        if let Some((ref_len, cand_len)) = self.truncated {
            writeln!(
                f,
                "  (length mismatch: ref={}, dut={}, truncated to {})",
                ref_len, cand_len, self.len
            )?;
        }
        writeln!(f, "  Length          : {} samples", self.len)?;
        writeln!(f, "  Max abs error   : {:.6e}", self.max_err)?;
        writeln!(f, "  Mean abs error  : {:.6e}", self.mean_err)?;
        writeln!(f, "  RMS error       : {:.6e}", self.rms_err)?;

        if self.within_tolerance() {
            write!(f, "Results match within tolerance {:.6e}.", self.tolerance)
        } else {
            writeln!(
                f,
                "Mismatch detected (tolerance {:.6e}). First {} samples:",
                self.tolerance,
                self.head.len()
            )?;
            for s in &self.head {
                writeln!(
                    f,
                    "  k={:2}: ref=({:.6}, {:.6}), dut=({:.6}, {:.6}), diff=({:.6e}, {:.6e})",
                    s.index,
                    s.reference.re,
                    s.reference.im,
                    s.candidate.re,
                    s.candidate.im,
                    s.diff.re,
                    s.diff.im
                )?;
            }
            Ok(())
        }
    }
}
