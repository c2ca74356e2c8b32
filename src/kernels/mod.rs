//! FFT Butterfly Kernels
//!
//! This module contains the butterfly kernels of the radix-2 decimation-in-time FFT. Each kernel
//! runs one stage over the whole buffer. The kernels are automatically selected at runtime based
//! on available CPU features.
//!
//! ## Organization
//!
//! - `dit`: Decimation-in-Time kernels for chunk sizes 2, 4 and the general table-driven case

pub mod dit;
