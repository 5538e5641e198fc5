//! Replay buffer with episode-aware history windows.
//!
//! # Key Components
//!
//! - [`HistoryReplayBuffer`]: fixed-capacity FIFO store of transitions
//! - [`HistoryReplayBufferConfig`]: capacity, dimensions and seed of the buffer
//! - [`HistoryBatch`]: sampled transitions together with their history windows
//! - [`HistorySegment`]: location of the history window of a sampled transition
//!
//! # History windows
//!
//! For a sampled transition at chronological index `ix`, the window covers
//! `[ix - max_his_len, ix)`. It is cut right after the last transition in that
//! range with a done flag, so it never reaches into a previous episode.
//! Windows shorter than `max_his_len` are left-padded with copies of their
//! first transition.
mod base;
mod batch;
mod config;
mod history;
mod rows;
#[cfg(feature = "candle")]
mod tensor;
mod transition;
pub use base::HistoryReplayBuffer;
pub use batch::HistoryBatch;
pub use config::HistoryReplayBufferConfig;
pub use history::HistorySegment;
pub use transition::Transition;
