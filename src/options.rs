/// Options controlling how an [`FftEngine`](crate::fft::FftEngine) behaves.
///
/// Calling FFT routines without specifying options selects the defaults, which auto-prepare
/// a plan the first time a size is seen.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub preparation: Preparation,
}

impl Options {
    /// Options that require every size to be prepared before it is transformed.
    pub fn explicit() -> Self {
        Self {
            preparation: Preparation::Explicit,
        }
    }
}

/// What a transform does when no plan is cached for the buffer's length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Preparation {
    #[default]
    /// Build the plan, install it in the cache, then transform
    Auto,
    /// Fail with [`FftError::NotPrepared`](crate::FftError::NotPrepared)
    ///
    /// Useful when plan construction must stay out of a latency-sensitive path.
    Explicit,
}
