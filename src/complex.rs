// src/complex.rs

//! Complex Q1.15 pair with hardware-exact wrapping arithmetic.
//!
//! All three operators wrap silently to 16 bits; none saturate. The multiply
//! keeps its four cross products in a wide intermediate and applies a true
//! arithmetic right shift *before* wrapping back down. Truncating to 16 bits
//! first would corrupt the top bits of legitimate negative products.

use crate::q15::Q15;
use num_complex::Complex64;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ComplexQ15 {
    pub re: Q15,
    pub im: Q15,
}

impl ComplexQ15 {
    pub const ZERO: ComplexQ15 = ComplexQ15 {
        re: Q15::ZERO,
        im: Q15::ZERO,
    };

    pub const fn new(re: Q15, im: Q15) -> Self {
        Self { re, im }
    }

    /// Builds a sample from raw register values.
    #[inline]
    pub const fn from_bits(re: i16, im: i16) -> Self {
        Self {
            re: Q15::from_bits(re),
            im: Q15::from_bits(im),
        }
    }

    /// Dequantizes to a normalized floating complex value.
    #[inline]
    pub fn to_complex64(self) -> Complex64 {
        Complex64::new(self.re.to_f64(), self.im.to_f64())
    }

    /// Quantizes a floating complex value with the saturating boundary policy.
    pub fn saturating_from_complex64(value: Complex64) -> Self {
        Self {
            re: Q15::saturating_from_f64(value.re),
            im: Q15::saturating_from_f64(value.im),
        }
    }
}

impl Add for ComplexQ15 {
    type Output = ComplexQ15;

    #[inline]
    fn add(self, rhs: ComplexQ15) -> Self::Output {
        ComplexQ15 {
            re: Q15::wrap(self.re.to_bits() as i64 + rhs.re.to_bits() as i64),
            im: Q15::wrap(self.im.to_bits() as i64 + rhs.im.to_bits() as i64),
        }
    }
}

impl Sub for ComplexQ15 {
    type Output = ComplexQ15;

    #[inline]
    fn sub(self, rhs: ComplexQ15) -> Self::Output {
        ComplexQ15 {
            re: Q15::wrap(self.re.to_bits() as i64 - rhs.re.to_bits() as i64),
            im: Q15::wrap(self.im.to_bits() as i64 - rhs.im.to_bits() as i64),
        }
    }
}

// Q1.15 x Q1.15 -> Q1.15: 16x16 -> 32-bit cross products, arithmetic shift
// right by FRAC_BITS on the wide value, then wrap each part to 16 bits.
impl Mul for ComplexQ15 {
    type Output = ComplexQ15;

    #[inline]
    fn mul(self, rhs: ComplexQ15) -> Self::Output {
        let ar = self.re.to_bits() as i64;
        let ai = self.im.to_bits() as i64;
        let br = rhs.re.to_bits() as i64;
        let bi = rhs.im.to_bits() as i64;

        let re_wide = (ar * br - ai * bi) >> Q15::FRAC_BITS;
        let im_wide = (ar * bi + ai * br) >> Q15::FRAC_BITS;

        ComplexQ15 {
            re: Q15::wrap(re_wide),
            im: Q15::wrap(im_wide),
        }
    }
}
