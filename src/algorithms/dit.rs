//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
//! The inverse transform conjugates the input, runs the same forward network and conjugates the
//! result again while scaling by `1/N`. That is the forward network with conjugated twiddles.
//!
use num_complex::Complex;

use crate::algorithms::bit_reversal::apply_permutation;
use crate::kernels::dit::{fft_dit_chunk_2, fft_dit_chunk_4, fft_dit_chunk_n};
use crate::planner::{Direction, Plan};
use crate::twiddles::stage_stride;
use crate::FftFloat;

/// Execute a single DIT stage, dispatching to appropriate kernel based on chunk size.
#[inline]
fn execute_dit_stage<T: FftFloat>(buf: &mut [Complex<T>], stage: usize, plan: &Plan<T>) {
    let dist = 1 << stage;
    let chunk_size = dist << 1;

    if chunk_size == 2 {
        fft_dit_chunk_2(buf);
    } else if chunk_size == 4 {
        fft_dit_chunk_4(buf);
    } else {
        let stride = stage_stride(plan.len(), dist);
        fft_dit_chunk_n(buf, plan.twiddles(), dist, stride);
    }
}

/// DIT FFT with a pre-computed plan
///
/// This implementation uses the Decimation-in-Time algorithm which:
/// - Requires bit-reversed input (performed automatically)
/// - Produces output in natural order
/// - Processes from small butterflies to large
///
/// # Panics
///
/// Panics if `buf.len()` differs from the size the plan was built for. Callers in this crate
/// check the length before getting here.
pub fn fft_dit_with_plan<T: FftFloat>(
    buf: &mut [Complex<T>],
    plan: &Plan<T>,
    direction: Direction,
) {
    assert_eq!(buf.len(), plan.len());

    let n = buf.len();

    // DIT requires bit-reversed input
    apply_permutation(buf, plan.permutation());

    // Handle inverse FFT
    if let Direction::Reverse = direction {
        for z in buf.iter_mut() {
            *z = z.conj();
        }
    }

    for stage in 0..plan.log_len() {
        execute_dit_stage(buf, stage, plan);
    }

    // Scaling for inverse transform
    if let Direction::Reverse = direction {
        let scaling_factor = T::one() / T::from(n).unwrap_or_else(T::nan);
        for z in buf.iter_mut() {
            *z = z.conj() * scaling_factor;
        }
    }
}
