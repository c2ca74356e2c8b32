//! FFT Algorithm Implementations
//!
//! This module contains the core FFT algorithm implementations.
//!
//! ## Available Algorithms
//!
//! - **DIT (Decimation-in-Time)**: Radix-2 Cooley-Tukey. Input is bit-reversed in place first,
//!   then butterflies run from small to large and the output lands in natural order.
//! - **Bit reversal**: the permutation table and its in-place application.

pub mod bit_reversal;
pub mod dit;
