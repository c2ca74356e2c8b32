//! The transform engine: a plan cache plus [`Options`], with in-place forward and inverse
//! transforms over complex buffers.
use std::sync::Arc;

use num_complex::Complex;

use crate::algorithms::dit::fft_dit_with_plan;
use crate::error::FftError;
use crate::options::{Options, Preparation};
use crate::planner::{Direction, Plan, PlanCache};
use crate::FftFloat;

/// Radix-2 FFT engine.
///
/// The engine owns (a shared handle to) the [`PlanCache`] it consults, so independent engines do
/// not see each other's plans unless they are given the same cache. Cloning an engine shares its
/// cache.
#[derive(Clone)]
pub struct FftEngine<T> {
    cache: Arc<PlanCache<T>>,
    options: Options,
}

impl<T: FftFloat> Default for FftEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FftFloat> FftEngine<T> {
    /// Create an engine with an empty private cache and default [`Options`]
    pub fn new() -> Self {
        Self::with_cache(Arc::new(PlanCache::new()), Options::default())
    }

    /// Create an engine with a fresh private cache
    pub fn with_options(options: Options) -> Self {
        Self::with_cache(Arc::new(PlanCache::new()), options)
    }

    /// Create an engine on top of an existing, possibly shared, cache
    pub fn with_cache(cache: Arc<PlanCache<T>>, options: Options) -> Self {
        Self { cache, options }
    }

    /// The cache this engine reads and populates
    pub fn cache(&self) -> &Arc<PlanCache<T>> {
        &self.cache
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build and cache the plan for `size` if it is not cached yet.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] if `size` is zero or not a power of 2.
    pub fn prepare(&self, size: usize) -> Result<(), FftError> {
        self.cache.prepare(size).map(|_| ())
    }

    /// Look up the plan for a buffer of `size` points, honoring [`Options::preparation`].
    pub(crate) fn plan_for(&self, size: usize) -> Result<Arc<Plan<T>>, FftError> {
        if !size.is_power_of_two() {
            log::debug!("rejecting transform of size {size}");
            return Err(FftError::InvalidSize(size));
        }

        match self.options.preparation {
            Preparation::Auto => self.cache.prepare(size),
            Preparation::Explicit => self.cache.get(size).ok_or_else(|| {
                log::debug!("no plan prepared for size {size}");
                FftError::NotPrepared(size)
            }),
        }
    }

    /// Transform `buf` in place in the given direction.
    ///
    /// The inverse direction includes the `1/N` scaling, so a forward transform followed by an
    /// inverse one reproduces the input up to rounding.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] if `buf.len()` is zero or not a power of 2, and
    /// [`FftError::NotPrepared`] in [`Preparation::Explicit`] mode when no plan is cached for
    /// `buf.len()`. `buf` is left untouched on error.
    pub fn process(&self, buf: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
        let plan = self.plan_for(buf.len())?;
        fft_dit_with_plan(buf, &plan, direction);
        Ok(())
    }

    /// Forward FFT of `buf`, in place. See [`Self::process`].
    pub fn fft(&self, buf: &mut [Complex<T>]) -> Result<(), FftError> {
        self.process(buf, Direction::Forward)
    }

    /// Inverse FFT of `buf`, in place and scaled by `1/N`. See [`Self::process`].
    pub fn ifft(&self, buf: &mut [Complex<T>]) -> Result<(), FftError> {
        self.process(buf, Direction::Reverse)
    }

    /// Transform `buf` with a plan the caller already holds, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if `buf.len()` differs from `plan.len()`.
    pub fn fft_with_plan(
        buf: &mut [Complex<T>],
        plan: &Plan<T>,
        direction: Direction,
    ) -> Result<(), FftError> {
        if buf.len() != plan.len() {
            return Err(FftError::LengthMismatch {
                expected: plan.len(),
                actual: buf.len(),
            });
        }
        fft_dit_with_plan(buf, plan, direction);
        Ok(())
    }
}
