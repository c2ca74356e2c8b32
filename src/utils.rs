//! Utility functions such as padding and real/complex conversions

use bytemuck::Pod;
use num_complex::Complex;

use crate::FftFloat;

/// Whether `n` is a valid transform size, i.e. a non-zero power of two
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

/// Smallest power of two that is `>= n`. Returns `1` for `n == 0`.
///
/// # Panics
///
/// Panics in debug builds if the result does not fit in a `usize`.
#[inline]
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Copy `x` into a new vector of length `len`, filling the tail with zeros.
///
/// If `len < x.len()` the copy is truncated to the first `len` samples.
pub fn zero_pad<T: FftFloat>(x: &[Complex<T>], len: usize) -> Vec<Complex<T>> {
    let mut padded = vec![Complex::new(T::zero(), T::zero()); len];
    let n = len.min(x.len());
    padded[..n].copy_from_slice(&x[..n]);
    padded
}

/// [`zero_pad`] `x` to the next power of two at or above its length
pub fn zero_pad_to_next_power_of_two<T: FftFloat>(x: &[Complex<T>]) -> Vec<Complex<T>> {
    zero_pad(x, next_power_of_two(x.len()))
}

/// Lift real samples into complex ones with zero imaginary part
pub fn real_to_complex<T: FftFloat>(reals: &[T]) -> Vec<Complex<T>> {
    reals.iter().map(|&re| Complex::new(re, T::zero())).collect()
}

/// Keep only the real part of every sample
pub fn complex_to_real<T: FftFloat>(signal: &[Complex<T>]) -> Vec<T> {
    signal.iter().map(|z| z.re).collect()
}

/// View an interleaved `[re, im, re, im, ...]` buffer as complex samples without copying.
///
/// Returns `None` if the buffer has an odd length.
pub fn as_complex<T: FftFloat + Pod>(interleaved: &[T]) -> Option<&[Complex<T>]> {
    bytemuck::try_cast_slice(interleaved).ok()
}

/// Mutable version of [`as_complex`], so an interleaved buffer can be transformed in place.
pub fn as_complex_mut<T: FftFloat + Pod>(interleaved: &mut [T]) -> Option<&mut [Complex<T>]> {
    bytemuck::try_cast_slice_mut(interleaved).ok()
}
