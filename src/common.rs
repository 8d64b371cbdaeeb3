// src/common.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for all golden-model operations.
pub type Result<T> = std::result::Result<T, FftError>;

/// Errors that can occur while building or running the golden model.
///
/// Length mismatch between two compared sequences is deliberately *not* here:
/// the comparator truncates to the shorter length and warns instead (see
/// [`crate::compare`]). A tolerance violation is a report outcome, not an
/// error either.
#[derive(Error, Debug)]
pub enum FftError {
    /// Transform length is not a power of two. Fatal for radix-2.
    #[error("FFT length {0} is not a power of two")]
    InvalidLength(usize),

    /// A buffer handed to the engine does not match the configured size.
    #[error("buffer holds {actual} samples but the engine was built for {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A mem-file line is neither blank nor valid hexadecimal.
    #[error("{}:{line}: malformed hex word '{text}'", path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        text: String,
    },

    /// A hex word failed to parse outside of any file context.
    #[error("malformed hex word '{0}'")]
    MalformedWord(String),

    /// File could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Common seam for anything that can run an in-place transform over a buffer.
///
/// Implemented by the fixed-point [`crate::engine::DitFft`] and the
/// floating-point [`crate::oracle::FloatFft`], so validation code can drive
/// either through the same interface.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<()>;
}
