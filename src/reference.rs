//! Direct-summation DFTs used as test oracles.
//!
//! Both transforms compute `X[k] = sum_n x[n] * e^{-2*pi*i*k*n/N}` in `O(N^2)` time, with the same
//! sign convention and no normalization as the forward FFT. They share no code with the fast
//! path so they can be used to check it.
use num_complex::Complex;

use crate::error::FftError;
use crate::FftFloat;

/// Naive DFT that evaluates every basis value on the fly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slow;

impl Slow {
    /// Compute the DFT of `input` into a new vector. Any length is accepted.
    pub fn transform<T: FftFloat>(&self, input: &[Complex<T>]) -> Vec<Complex<T>> {
        let big_n = input.len();
        let two_pi = T::PI() + T::PI();
        let n_t = T::from(big_n).unwrap_or_else(T::nan);

        (0..big_n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .fold(Complex::new(T::zero(), T::zero()), |acc, (n, x)| {
                        // reduce k*n mod N first so the angle stays in [0, 2*pi)
                        let j = T::from((k * n) % big_n).unwrap_or_else(T::nan);
                        let (sin, cos) = (-two_pi * j / n_t).sin_cos();
                        acc + *x * Complex::new(cos, sin)
                    })
            })
            .collect()
    }
}

/// Naive DFT with the `N` basis values `e^{-2*pi*i*j/N}` precomputed for one size.
#[derive(Debug, Clone)]
pub struct SlowPre<T> {
    basis: Vec<Complex<T>>,
}

impl<T: FftFloat> SlowPre<T> {
    /// Precompute the basis for transforms of `big_n` points
    pub fn new(big_n: usize) -> Self {
        let two_pi = T::PI() + T::PI();
        let n_t = T::from(big_n).unwrap_or_else(T::nan);

        let basis = (0..big_n)
            .map(|j| {
                let j = T::from(j).unwrap_or_else(T::nan);
                let (sin, cos) = (-two_pi * j / n_t).sin_cos();
                Complex::new(cos, sin)
            })
            .collect();

        Self { basis }
    }

    /// Size this transform was built for
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    /// Compute the DFT of `input` into a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if `input.len()` differs from the size given to
    /// [`SlowPre::new`].
    pub fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let big_n = self.basis.len();
        if input.len() != big_n {
            return Err(FftError::LengthMismatch {
                expected: big_n,
                actual: input.len(),
            });
        }

        Ok((0..big_n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .fold(Complex::new(T::zero(), T::zero()), |acc, (n, x)| {
                        acc + *x * self.basis[(k * n) % big_n]
                    })
            })
            .collect())
    }
}
