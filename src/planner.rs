//! The planner module provides the per-size planning data of the FFT and the cache that
//! shares it between calls. A [`Plan`] holds everything a transform of one size needs that does
//! not depend on the input: the bit reversal permutation table and the twiddle factors.
//! A [`PlanCache`] builds each plan once and hands out shared references to it afterwards.
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use num_complex::Complex;

use crate::algorithms::bit_reversal::permutation_index;
use crate::error::FftError;
use crate::twiddles::generate_twiddles;
use crate::FftFloat;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Run the butterfly network on the data as given
    Forward,
    /// Conjugate the data before and after the forward network, then scale by `1/N`
    Reverse,
}

/// Precomputed data for a radix-2 FFT of one size.
///
/// A plan is immutable after construction and direction-agnostic: the inverse transform reuses
/// the forward twiddles through conjugation.
#[derive(Debug)]
pub struct Plan<T> {
    len: usize,
    log_len: usize,
    permutation: Vec<usize>,
    twiddles: Vec<Complex<T>>,
}

impl<T: FftFloat> Plan<T> {
    /// Build a plan for an FFT of size `num_points`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] if `num_points` is zero or not a power of 2.
    pub fn new(num_points: usize) -> Result<Self, FftError> {
        if !num_points.is_power_of_two() {
            return Err(FftError::InvalidSize(num_points));
        }

        Ok(Self::build(num_points))
    }

    /// `num_points` must already be known to be a power of 2.
    fn build(num_points: usize) -> Self {
        let permutation = permutation_index(num_points);
        let twiddles = generate_twiddles(num_points);
        debug_assert_eq!(twiddles.len(), num_points / 2);

        Self {
            len: num_points,
            log_len: num_points.ilog2() as usize,
            permutation,
            twiddles,
        }
    }
}

impl<T> Plan<T> {
    /// Transform size this plan was built for
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a plan covers at least one point
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `log_2` of the transform size, i.e. the number of butterfly stages
    pub fn log_len(&self) -> usize {
        self.log_len
    }

    /// The bit reversal permutation table
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// The flat table of `N/2` roots `e^{-2*pi*i*k/N}`
    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }
}

type Slot<T> = Arc<OnceLock<Arc<Plan<T>>>>;

/// Size-keyed cache of [`Plan`]s.
///
/// Installed plans are read under a shared lock. The first request for a size reserves a slot
/// under the exclusive lock and then builds the plan outside of it, so only one caller builds a
/// given size, concurrent callers for that size wait for the finished plan, and different
/// sizes are built in parallel. Entries are never evicted.
pub struct PlanCache<T> {
    slots: RwLock<HashMap<usize, Slot<T>>>,
}

impl<T> Default for PlanCache<T> {
    fn default() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: FftFloat> PlanCache<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a plan for `num_points` exists and return it.
    ///
    /// Repeated calls for the same size return the same shared plan.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] if `num_points` is zero or not a power of 2. Nothing is
    /// inserted into the cache in that case.
    pub fn prepare(&self, num_points: usize) -> Result<Arc<Plan<T>>, FftError> {
        if !num_points.is_power_of_two() {
            return Err(FftError::InvalidSize(num_points));
        }

        if let Some(plan) = self.get(num_points) {
            log::trace!("plan cache hit for size {num_points}");
            return Ok(plan);
        }

        let slot = {
            let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(num_points).or_default())
        };

        let plan = slot.get_or_init(|| {
            log::debug!("building FFT plan for size {num_points}");
            Arc::new(Plan::build(num_points))
        });

        Ok(Arc::clone(plan))
    }

    /// The cached plan for `num_points`, if one has been fully built
    pub fn get(&self, num_points: usize) -> Option<Arc<Plan<T>>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&num_points)
            .and_then(|slot| slot.get())
            .map(Arc::clone)
    }

    /// Whether a fully built plan for `num_points` is cached
    pub fn contains(&self, num_points: usize) -> bool {
        self.get(num_points).is_some()
    }
}

impl<T> PlanCache<T> {
    /// Number of sizes with a reserved or installed plan
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached plan. Plans already handed out stay valid.
    pub fn clear(&self) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
