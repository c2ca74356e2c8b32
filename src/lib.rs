//! A radix-2 Cooley-Tukey FFT for complex, power-of-two length sequences.
//!
//! Transforms run in place. The per-size data they need, the bit reversal permutation and the
//! twiddle factors, is built once into a [`Plan`] and kept in a [`PlanCache`] so repeated
//! transforms of one size only pay for the butterflies.
//!
//! There are two ways in:
//!
//! - [`FftEngine`] owns its cache and [`Options`]. Construct one per component, or share a cache
//!   between engines with [`FftEngine::with_cache`].
//! - The free functions [`prepare`], [`fft`], [`ifft`], [`convolve`] and [`fast_convolve`] work
//!   on `f64` samples through one process-wide engine with default options, which prepares
//!   missing plans on first use.
//!
//! ```
//! use num_complex::Complex64;
//!
//! let mut signal: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let original = signal.clone();
//!
//! planfft::prepare(8).unwrap();
//! planfft::fft(&mut signal).unwrap();
//! planfft::ifft(&mut signal).unwrap();
//!
//! for (a, b) in signal.iter().zip(original.iter()) {
//!     assert!((a - b).norm() < 1e-12);
//! }
//! ```
//!
//! Accuracy: against a direct `O(N^2)` summation the forward transform agrees within `1e-9`
//! absolute for unit-magnitude inputs up to `N = 2^10`. Rounding error grows slowly with `N`
//! and with the dynamic range of the input, so tolerances should be scaled accordingly for much
//! larger transforms.
use std::fmt::Debug;
use std::sync::LazyLock;

use num_complex::Complex;
use num_traits::{Float, FloatConst};

pub mod algorithms;
mod convolve;
pub mod error;
pub mod fft;
mod kernels;
pub mod options;
pub mod planner;
pub mod reference;
mod twiddles;
pub mod utils;

pub use crate::algorithms::bit_reversal::permutation_index;
pub use crate::error::FftError;
pub use crate::fft::FftEngine;
pub use crate::options::{Options, Preparation};
pub use crate::planner::{Direction, Plan, PlanCache};

/// Floating point types the engine can transform, i.e. `f32` and `f64`.
pub trait FftFloat: Float + FloatConst + Debug + Send + Sync + 'static {}

impl<T> FftFloat for T where T: Float + FloatConst + Debug + Send + Sync + 'static {}

static DEFAULT_ENGINE: LazyLock<FftEngine<f64>> = LazyLock::new(FftEngine::new);

/// The process-wide `f64` engine behind the free functions
pub fn default_engine() -> &'static FftEngine<f64> {
    &DEFAULT_ENGINE
}

/// Build and cache the plan for `size` in the process-wide engine.
///
/// Calling this more than once for a size is cheap and has no further effect.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `size` is zero or not a power of 2; nothing is cached.
pub fn prepare(size: usize) -> Result<(), FftError> {
    DEFAULT_ENGINE.prepare(size)
}

/// Forward FFT, in place, through the process-wide engine.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `buf.len()` is zero or not a power of 2. `buf` is left
/// untouched in that case.
pub fn fft(buf: &mut [Complex<f64>]) -> Result<(), FftError> {
    DEFAULT_ENGINE.fft(buf)
}

/// Inverse FFT, in place and scaled by `1/N`, through the process-wide engine.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `buf.len()` is zero or not a power of 2. `buf` is left
/// untouched in that case.
pub fn ifft(buf: &mut [Complex<f64>]) -> Result<(), FftError> {
    DEFAULT_ENGINE.ifft(buf)
}

/// Linear convolution through the process-wide engine. See [`FftEngine::convolve`].
pub fn convolve(x: &[Complex<f64>], y: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, FftError> {
    DEFAULT_ENGINE.convolve(x, y)
}

/// In-place circular convolution through the process-wide engine. See
/// [`FftEngine::fast_convolve`].
pub fn fast_convolve(x: &mut [Complex<f64>], y: &mut [Complex<f64>]) -> Result<(), FftError> {
    DEFAULT_ENGINE.fast_convolve(x, y)
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, gen_random_signal};

    use super::*;
    use crate::reference::{Slow, SlowPre};

    #[test]
    fn fft() {
        let n = 1 << 10;
        let x = gen_random_signal::<f64>(n);
        let slow_pre = SlowPre::new(n);
        prepare(n).unwrap();

        let y1 = Slow.transform(&x);
        let y2 = slow_pre.transform(&x).unwrap();
        let mut y3 = x.clone();
        super::fft(&mut y3).unwrap();

        assert_complex_closeness(&y2, &y1, 1e-9);
        assert_complex_closeness(&y3, &y1, 1e-9);
    }

    #[test]
    fn ifft() {
        let n = 256;
        let x = gen_random_signal::<f64>(n);
        prepare(n).unwrap();

        let mut y = x.clone();
        super::fft(&mut y).unwrap();
        super::ifft(&mut y).unwrap();

        assert_complex_closeness(&y, &x, 1e-9);
    }

    #[test]
    fn prepare_rejects_invalid_sizes() {
        assert_eq!(prepare(0), Err(FftError::InvalidSize(0)));
        assert_eq!(prepare(3), Err(FftError::InvalidSize(3)));
        assert_eq!(prepare(100), Err(FftError::InvalidSize(100)));

        assert!(!default_engine().cache().contains(3));
        assert!(!default_engine().cache().contains(100));

        prepare(4).unwrap();
        prepare(4).unwrap();
        let mut y = vec![Complex64::new(1.0, 0.0); 4];
        super::fft(&mut y).unwrap();
        assert_complex_closeness(
            &y,
            &[
                Complex64::new(4.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
            ],
            1e-15,
        );
    }

    #[test]
    fn scaled_round_trip_across_sizes() {
        for k in 0..=14 {
            let n = 1 << k;
            let x: Vec<Complex64> = gen_random_signal::<f64>(n)
                .into_iter()
                .map(|z| z * 1000.0)
                .collect();

            let mut y = x.clone();
            super::fft(&mut y).unwrap();
            if n <= 1 << 10 {
                assert_complex_closeness(&y, &Slow.transform(&x), 1e-9 * 1000.0);
            }
            super::ifft(&mut y).unwrap();
            assert_complex_closeness(&y, &x, 1e-8);
        }
    }

    #[test]
    fn transforms_keep_buffer_length() {
        let mut y = gen_random_signal::<f64>(512);
        let ptr = y.as_ptr();
        super::fft(&mut y).unwrap();
        assert_eq!(y.len(), 512);
        assert_eq!(y.as_ptr(), ptr);
    }

    #[test]
    fn permutation_index_is_exported() {
        assert_eq!(permutation_index(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn free_convolution() {
        let x = vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        let got = convolve(&x, &x).unwrap();
        assert_complex_closeness(
            &got,
            &[
                Complex64::new(1.0, 0.0),
                Complex64::new(2.0, 0.0),
                Complex64::new(1.0, 0.0),
            ],
            1e-12,
        );

        let mut a = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        let mut b = vec![Complex64::new(2.0, 0.0), Complex64::new(3.0, 0.0)];
        fast_convolve(&mut a, &mut b).unwrap();
        assert_complex_closeness(&a, &[Complex64::new(2.0, 0.0), Complex64::new(3.0, 0.0)], 1e-12);
    }
}
