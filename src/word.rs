// src/word.rs

//! Packed-word codec for the .mem interchange format.
//!
//! A word is a 32-bit unsigned integer: bits [31:16] hold the real part and
//! bits [15:0] the imaginary part, each as Q1.15 two's complement. Encoding
//! saturates at the boundary; nothing in here wraps (wraparound belongs to
//! the butterfly datapath, see [`crate::complex`]).

use crate::common::{FftError, Result};
use crate::complex::ComplexQ15;
use crate::q15::Q15;
use num_complex::Complex64;

/// Extracts the two 16-bit halves, reinterpreting each as two's complement.
#[inline]
pub fn decode(word: u32) -> ComplexQ15 {
    let re = (word >> 16) as u16 as i16;
    let im = word as u16 as i16;
    ComplexQ15::from_bits(re, im)
}

/// Decodes a word straight to a normalized floating complex value.
#[inline]
pub fn decode_to_complex64(word: u32) -> Complex64 {
    decode(word).to_complex64()
}

/// Packs a quantized sample back into the word layout.
#[inline]
pub fn encode_sample(sample: ComplexQ15) -> u32 {
    let re = sample.re.to_bits() as u16 as u32;
    let im = sample.im.to_bits() as u16 as u32;
    (re << 16) | im
}

/// Quantizes (round half-to-even, then saturate to [-32768, 32767]) and packs
/// a floating complex value.
#[inline]
pub fn encode(value: Complex64) -> u32 {
    encode_sample(ComplexQ15 {
        re: Q15::saturating_from_f64(value.re),
        im: Q15::saturating_from_f64(value.im),
    })
}

/// Parses one mem-file line into a 32-bit word.
///
/// The line is trimmed first; a blank line yields 0. An optional `0x`/`0X`
/// prefix is accepted. Anything else that is not valid hexadecimal fails
/// fast with [`FftError::MalformedWord`].
pub fn parse_hex_line(line: &str) -> Result<u32> {
    let text = line.trim();
    if text.is_empty() {
        return Ok(0);
    }
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|_| FftError::MalformedWord(text.to_string()))
}
