//! Bit-exact Q1.15 radix-2 DIT FFT golden model.
//!
//! This crate reproduces, at bit level, the arithmetic and addressing of a
//! fixed-point hardware FFT datapath: 16x16 -> 32-bit multiplies, arithmetic
//! right shift, 16-bit wraparound inside the butterflies, and saturation only
//! at the file-encoding boundary. It generates golden reference vectors
//! (`.mem` files of packed 32-bit hex words) and compares hardware output
//! against them.
//!
//! The two quantization policies are kept strictly apart:
//! [`q15::Q15::wrap`] models register overflow inside the datapath, while
//! [`q15::Q15::saturating_from_f64`] clamps at the I/O boundary. An
//! implementation that blurs the two will not be bit-exact against hardware.

pub mod bitrev;
pub mod common;
pub mod compare;
pub mod complex;
pub mod engine;
pub mod mem;
pub mod oracle;
pub mod q15;
pub mod signal;
pub mod twiddle;
pub mod word;

pub use common::{FftError, FftProcess, Result};
pub use complex::ComplexQ15;
pub use engine::{Butterfly, DitFft, StageDescriptor};
pub use q15::Q15;
pub use twiddle::TwiddleTable;
