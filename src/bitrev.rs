// src/bitrev.rs

//! Bit-reversal permutation for radix-2 transforms.
//!
//! `bit_reverse_indices(n)` reverses the low log2(n) bits of each index. The
//! mapping is a bijection on [0, n) and an involution: applying it twice
//! restores the original order. The engine uses it once per transform; it is
//! also exposed on its own for reordering arbitrary buffers, e.g. preparing a
//! natural-order file for a hardware input stage that expects bit-reversed
//! samples.

use crate::common::{FftError, Result};

/// Computes the permutation `rev` with `rev[i]` = bit-reversed `i`.
pub fn bit_reverse_indices(n: usize) -> Result<Vec<usize>> {
    if !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }
    let bits = n.trailing_zeros();
    let rev = (0..n)
        .map(|i| {
            let mut b = i;
            let mut r = 0;
            for _ in 0..bits {
                r = (r << 1) | (b & 1);
                b >>= 1;
            }
            r
        })
        .collect();
    Ok(rev)
}

/// Produces a new buffer with `output[i] = input[perm[i]]`.
pub fn apply<T: Copy>(input: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&p| input[p]).collect()
}

/// Applies the bit-reversal permutation in place.
///
/// Because the permutation is an involution, it decomposes into disjoint
/// swaps; swapping each pair once (when `i < rev[i]`) is enough.
pub fn permute_in_place<T>(buffer: &mut [T], perm: &[usize]) {
    for i in 0..buffer.len() {
        let j = perm[i];
        if i < j {
            buffer.swap(i, j);
        }
    }
}
