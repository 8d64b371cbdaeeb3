// src/q15.rs

//! Q1.15 scalar: 1 sign bit, 15 fractional bits, values in [-1.0, 1.0).
//!
//! Two conversion policies exist and must never be mixed up:
//!
//! - [`Q15::wrap`] reduces a wide intermediate modulo 2^16, the way a
//!   fixed-width hardware register overflows. Used everywhere inside the
//!   butterfly datapath.
//! - [`Q15::saturating_from_f64`] clamps to [-32768, 32767]. Used only at
//!   the file-encoding boundary.

use std::fmt;

/// Q1.15 value stored as a signed 16-bit integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[repr(transparent)]
pub struct Q15(i16);

impl Q15 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 15;
    /// Scaling factor 2^15 between the normalized value and the raw integer.
    pub const SCALE: i32 = 1 << Self::FRAC_BITS;
    /// Smallest representable raw value (-1.0).
    pub const MIN: i16 = i16::MIN;
    /// Largest representable raw value (1.0 - 2^-15).
    pub const MAX: i16 = i16::MAX;

    pub const ZERO: Q15 = Q15(0);

    /// Creates a Q15 from the raw integer value (no scaling).
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Wraps a wide intermediate into 16-bit two's-complement range.
    ///
    /// This is pure modular reduction: take `wide` mod 2^16 into [0, 2^16),
    /// then reinterpret the top bit as sign. Overflow bits are discarded,
    /// mirroring a 16-bit hardware register. Never saturates.
    #[inline]
    pub const fn wrap(wide: i64) -> Self {
        Self(wide as u16 as i16)
    }

    /// Converts a normalized float to Q1.15, rounding half-to-even and
    /// clamping to [-32768, 32767].
    ///
    /// This is the boundary policy for file encoding; internal arithmetic
    /// uses [`Q15::wrap`] instead.
    pub fn saturating_from_f64(value: f64) -> Self {
        let scaled = (value * Self::SCALE as f64).round_ties_even();
        Self(scaled.clamp(Self::MIN as f64, Self::MAX as f64) as i16)
    }

    /// Normalized value in [-1.0, 1.0).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl fmt::Debug for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
