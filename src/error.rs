//! Error type shared by every fallible operation in the crate.

/// Errors returned by planning and transform calls.
///
/// All validation happens before a caller's buffer is touched, so an `Err` always means the
/// buffer still holds its original contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The requested size is zero or not a power of two.
    #[error("invalid transform size {0}: must be a non-zero power of two")]
    InvalidSize(usize),
    /// No plan is cached for this size and the engine runs with [`Preparation::Explicit`].
    ///
    /// [`Preparation::Explicit`]: crate::options::Preparation::Explicit
    #[error("no plan prepared for size {0}")]
    NotPrepared(usize),
    /// A buffer does not have the length a fixed-size object was built for.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
