//! Errors in the library.
use thiserror::Error;

/// Errors raised by [`HistoryReplayBuffer`](crate::replay_buffer::HistoryReplayBuffer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryBufferError {
    /// A vector passed to the buffer does not match the configured dimension.
    #[error("Invalid argument: `{field}` has length {actual}, expected {expected}")]
    InvalidArgument {
        /// Name of the offending field.
        field: &'static str,

        /// Configured dimension.
        expected: usize,

        /// Length of the given vector.
        actual: usize,
    },

    /// The buffer does not hold more transitions than the history length.
    #[error("Insufficient data: {len} transitions stored, more than {max_his_len} required")]
    InsufficientData {
        /// Number of stored transitions.
        len: usize,

        /// Requested history length.
        max_his_len: usize,
    },

    /// An anchor index given by the caller is outside of `[low, high)`.
    #[error("Anchor index {anchor} is out of the sampling range [{low}, {high})")]
    AnchorOutOfRange {
        /// The anchor index.
        anchor: usize,

        /// Inclusive lower bound.
        low: usize,

        /// Exclusive upper bound.
        high: usize,
    },

    /// The configured capacity is zero.
    #[error("Capacity of the replay buffer must be positive")]
    ZeroCapacity,
}
