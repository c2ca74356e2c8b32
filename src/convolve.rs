//! Convolution through the FFT: pointwise products of spectra.
use num_complex::Complex;

use crate::algorithms::dit::fft_dit_with_plan;
use crate::error::FftError;
use crate::fft::FftEngine;
use crate::planner::Direction;
use crate::utils::{next_power_of_two, zero_pad};
use crate::FftFloat;

impl<T: FftFloat> FftEngine<T> {
    /// Linear convolution of `x` and `y`.
    ///
    /// The result has `x.len() + y.len() - 1` samples. Both operands are zero padded to the next
    /// power of two at or above that length, so any input lengths are accepted. If either input
    /// is empty the result is empty.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::NotPrepared`] in explicit preparation mode when the padded size has
    /// no cached plan.
    pub fn convolve(
        &self,
        x: &[Complex<T>],
        y: &[Complex<T>],
    ) -> Result<Vec<Complex<T>>, FftError> {
        if x.is_empty() || y.is_empty() {
            return Ok(Vec::new());
        }

        let out_len = x.len() + y.len() - 1;
        let n = next_power_of_two(out_len);

        let mut xp = zero_pad(x, n);
        let mut yp = zero_pad(y, n);
        self.fast_convolve(&mut xp, &mut yp)?;

        xp.truncate(out_len);
        Ok(xp)
    }

    /// Circular convolution of two buffers of the same power-of-two length, in place.
    ///
    /// On success `x` holds the convolution and `y` holds the spectrum of its original contents.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if the lengths differ, [`FftError::InvalidSize`] if
    /// the common length is not a power of two, and [`FftError::NotPrepared`] in explicit
    /// preparation mode without a cached plan. Neither buffer is modified on error.
    pub fn fast_convolve(&self, x: &mut [Complex<T>], y: &mut [Complex<T>]) -> Result<(), FftError> {
        if x.len() != y.len() {
            return Err(FftError::LengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }

        let plan = self.plan_for(x.len())?;

        fft_dit_with_plan(x, &plan, Direction::Forward);
        fft_dit_with_plan(y, &plan, Direction::Forward);
        for (a, b) in x.iter_mut().zip(y.iter()) {
            *a = *a * *b;
        }
        fft_dit_with_plan(x, &plan, Direction::Reverse);

        Ok(())
    }
}
