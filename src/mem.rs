// src/mem.rs

//! Reading and writing .mem files: UTF-8 text, one 32-bit word per line,
//! written as 8 uppercase hex digits. On read, lines are trimmed, an optional
//! `0x`/`0X` prefix is accepted, and blank lines are skipped without shifting
//! sample indices. Malformed lines fail fast naming the file and line number.

use crate::common::{FftError, Result};
use crate::complex::ComplexQ15;
use crate::word;
use num_complex::Complex64;
use std::fs;
use std::path::Path;

/// Reads all words from a mem file.
pub fn read_words(path: &Path) -> Result<Vec<u32>> {
    let text = fs::read_to_string(path).map_err(|source| FftError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let w = word::parse_hex_line(trimmed).map_err(|_| FftError::MalformedInput {
            path: path.to_path_buf(),
            line: line_no + 1,
            text: trimmed.to_string(),
        })?;
        words.push(w);
    }
    Ok(words)
}

/// Loads a mem file as quantized complex samples.
pub fn load_samples(path: &Path) -> Result<Vec<ComplexQ15>> {
    Ok(read_words(path)?.into_iter().map(word::decode).collect())
}

/// Loads a mem file, dequantized to floating complex values.
pub fn load_complex64(path: &Path) -> Result<Vec<Complex64>> {
    Ok(read_words(path)?
        .into_iter()
        .map(word::decode_to_complex64)
        .collect())
}

/// Writes words one per line as 8 uppercase hex digits.
pub fn write_words(path: &Path, words: &[u32]) -> Result<()> {
    let mut text = String::with_capacity(words.len() * 9);
    for w in words {
        text.push_str(&format!("{:08X}\n", w));
    }
    fs::write(path, text).map_err(|source| FftError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes quantized samples in the packed word layout.
pub fn save_samples(path: &Path, samples: &[ComplexQ15]) -> Result<()> {
    let words: Vec<u32> = samples.iter().map(|s| word::encode_sample(*s)).collect();
    write_words(path, &words)
}

/// Quantizes (saturating boundary policy) and writes floating complex values.
pub fn save_complex64(path: &Path, values: &[Complex64]) -> Result<()> {
    let words: Vec<u32> = values.iter().map(|v| word::encode(*v)).collect();
    write_words(path, &words)
}
