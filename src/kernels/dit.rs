//! DIT-specific FFT Kernels
//!
//! FFT kernels for the Decimation-in-Time algorithm. Every kernel combines pairs of
//! sub-transforms of size `dist` into one of size `2 * dist` with the butterfly
//! `a' = a + w*b`, `b' = a - w*b`.
//!
use num_complex::Complex;

use crate::FftFloat;

/// DIT butterfly for chunk_size == 2
///
/// The only root at this stage is `W_2^0 = 1`, so no multiplications are needed.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_dit_chunk_2<T: FftFloat>(buf: &mut [Complex<T>]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// DIT butterfly for chunk_size == 4 with hard-coded twiddle factors
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_dit_chunk_4<T: FftFloat>(buf: &mut [Complex<T>]) {
    const DIST: usize = 2;
    const CHUNK_SIZE: usize = DIST << 1;

    buf.chunks_exact_mut(CHUNK_SIZE).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(DIST);

        // First pair (W_4^0 = 1)
        let in0 = s0[0];
        let in1 = s1[0];

        s0[0] = in0 + in1;
        s1[0] = in0 - in1;

        // Second pair (W_4^1 = -i)
        let in0 = s0[1];
        let in1 = s1[1];

        // (re + i*im) * (-i) = im - i*re
        let t = Complex::new(in1.im, -in1.re);
        s0[1] = in0 + t;
        s1[1] = in0 - t;
    });
}

/// General DIT butterfly for chunk_size == `2 * dist`.
///
/// `twiddles` is the flat table of the plan and `stride` selects the roots of this stage: the
/// `j`-th butterfly of every chunk uses `twiddles[j * stride]`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_dit_chunk_n<T: FftFloat>(
    buf: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    dist: usize,
    stride: usize,
) {
    let chunk_size = dist << 1;
    debug_assert!(twiddles.len() >= dist * stride);

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(twiddles.iter().step_by(stride))
            .for_each(|((a, b), w)| {
                let t = *w * *b;
                let in0 = *a;
                *a = in0 + t;
                *b = in0 - t;
            });
    });
}
