#![warn(missing_docs)]
//! A replay buffer for history-conditioned reinforcement learning agents.
//!
//! [`HistoryReplayBuffer`] stores transitions `(s_t, a_t, r_t, done_t, s_t+1)` in a
//! fixed-capacity ring and produces [`HistoryBatch`]es. A batch holds the sampled
//! transitions and, for each of them, the trailing run of at most `max_his_len`
//! transitions of the same episode. Recurrent actors and critics consume this run.
//!
//! ```rust
//! use border_history_buffer::{
//!     ExperienceBufferBase, HistoryReplayBuffer, HistoryReplayBufferConfig, ReplayBufferBase,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = HistoryReplayBufferConfig::default()
//!     .capacity(100)
//!     .state_dim(3)
//!     .action_dim(1)
//!     .seed(42);
//! let mut buffer = HistoryReplayBuffer::build(&config)?;
//!
//! for t in 0..20 {
//!     let s = vec![t as f32; 3];
//!     let s_next = vec![(t + 1) as f32; 3];
//!     buffer.add(&s, &[0.5], 1.0, t % 7 == 6, &s_next)?;
//! }
//! assert_eq!(buffer.len(), 20);
//!
//! let batch = buffer.sample_batch(8, 4)?;
//! assert_eq!(batch.h_state.shape(), &[8, 4, 3]);
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod replay_buffer;

mod base;
pub use base::{ExperienceBufferBase, ReplayBufferBase};
pub use error::HistoryBufferError;
pub use replay_buffer::{
    HistoryBatch, HistoryReplayBuffer, HistoryReplayBufferConfig, HistorySegment, Transition,
};
