use num_complex::Complex;

use crate::FftFloat;

/// Generate the flat twiddle table for an FFT of size `big_n`.
///
/// Entry `k` holds `e^{-2*pi*i*k/N}` for `k` in `0..N/2`. A butterfly stage of half-width
/// `dist` (chunk size `2 * dist`) reads its `j`-th root at index `j * (N / (2 * dist))`, so this
/// one table serves every stage. Each root is computed directly from its angle rather than by
/// repeated rotation, which keeps rounding error from accumulating along the table.
///
/// Sizes 1 and 2 need no non-trivial roots; the table for size 2 is `[1]` and for size 1 it is
/// empty.
pub(crate) fn generate_twiddles<T: FftFloat>(big_n: usize) -> Vec<Complex<T>> {
    let dist = big_n >> 1;
    let mut twiddles = vec![Complex::new(T::one(), T::zero()); dist];

    let two_pi = T::PI() + T::PI();
    let angle_mult = -two_pi / T::from(big_n).unwrap_or_else(T::nan);

    for (k, w) in twiddles.iter_mut().enumerate().skip(1) {
        let angle = angle_mult * T::from(k).unwrap_or_else(T::nan);
        let (sin, cos) = angle.sin_cos();
        *w = Complex::new(cos, sin);
    }

    twiddles
}

/// Stride into the flat table for a stage of half-width `dist` in a transform of size `big_n`.
#[inline]
pub(crate) fn stage_stride(big_n: usize, dist: usize) -> usize {
    big_n / (dist << 1)
}
