//! Batch of transitions with their history windows.
use ndarray::{aview1, s, Array1, Array2, Array3, ArrayD, ArrayViewD};
use std::collections::BTreeMap;

/// A batch produced by [`HistoryReplayBuffer`](super::HistoryReplayBuffer).
///
/// With batch size `B`, history length `H`, state dimension `Ds` and action
/// dimension `Da`, the shapes of the fields are:
///
/// | field | shape |
/// |---|---|
/// | `state`, `next_state` | `[B, Ds]` |
/// | `action` | `[B, Da]` |
/// | `reward`, `done` | `[B]` |
/// | `h_state`, `h_next_state` | `[B, H, Ds]` |
/// | `h_action`, `h_next_action` | `[B, H, Da]` |
/// | `h_state_length`, `h_next_state_length` | `[B]` |
///
/// Row `t` of `h_next_action` is the action following row `t` of `h_action`,
/// so the last real row of `h_next_action` is the action of the sampled transition.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryBatch {
    /// States `s_t`.
    pub state: Array2<f32>,

    /// Next states `s_t+1`.
    pub next_state: Array2<f32>,

    /// Actions `a_t`.
    pub action: Array2<f32>,

    /// Rewards `r_t`.
    pub reward: Array1<f32>,

    /// Done flags encoded as 0 or 1.
    pub done: Array1<f32>,

    /// States in the history windows.
    pub h_state: Array3<f32>,

    /// Actions in the history windows.
    pub h_action: Array3<f32>,

    /// Next states in the history windows.
    pub h_next_state: Array3<f32>,

    /// Actions one step after those in `h_action`.
    pub h_next_action: Array3<f32>,

    /// Number of real (non-padded) rows in each history window.
    pub h_state_length: Array1<f32>,

    /// Same as `h_state_length`.
    pub h_next_state_length: Array1<f32>,

    /// Chronological indices of the sampled transitions.
    pub ix_sample: Vec<usize>,
}

impl HistoryBatch {
    /// Keys of [`HistoryBatch::into_map`].
    pub const KEYS: [&'static str; 11] = [
        "state",
        "next_state",
        "action",
        "reward",
        "done",
        "h_state",
        "h_action",
        "h_next_state",
        "h_next_action",
        "h_state_length",
        "h_next_state_length",
    ];

    /// Creates a zero-filled batch.
    pub(super) fn zeros(
        batch_size: usize,
        max_his_len: usize,
        state_dim: usize,
        action_dim: usize,
    ) -> Self {
        let (b, h) = (batch_size, max_his_len);
        Self {
            state: Array2::zeros((b, state_dim)),
            next_state: Array2::zeros((b, state_dim)),
            action: Array2::zeros((b, action_dim)),
            reward: Array1::zeros(b),
            done: Array1::zeros(b),
            h_state: Array3::zeros((b, h, state_dim)),
            h_action: Array3::zeros((b, h, action_dim)),
            h_next_state: Array3::zeros((b, h, state_dim)),
            h_next_action: Array3::zeros((b, h, action_dim)),
            h_state_length: Array1::zeros(b),
            h_next_state_length: Array1::zeros(b),
            ix_sample: Vec::with_capacity(b),
        }
    }

    /// Writes the single-step fields of the `n`-th sample.
    pub(super) fn set_step(
        &mut self,
        n: usize,
        state: &[f32],
        action: &[f32],
        reward: f32,
        is_done: bool,
        next_state: &[f32],
    ) {
        self.state.row_mut(n).assign(&aview1(state));
        self.action.row_mut(n).assign(&aview1(action));
        self.next_state.row_mut(n).assign(&aview1(next_state));
        self.reward[n] = reward;
        self.done[n] = if is_done { 1. } else { 0. };
    }

    /// Writes row `t` of the history window of the `n`-th sample.
    pub(super) fn set_history_row(
        &mut self,
        n: usize,
        t: usize,
        state: &[f32],
        action: &[f32],
        next_state: &[f32],
        next_action: &[f32],
    ) {
        self.h_state.slice_mut(s![n, t, ..]).assign(&aview1(state));
        self.h_action.slice_mut(s![n, t, ..]).assign(&aview1(action));
        self.h_next_state
            .slice_mut(s![n, t, ..])
            .assign(&aview1(next_state));
        self.h_next_action
            .slice_mut(s![n, t, ..])
            .assign(&aview1(next_action));
    }

    /// Records the history length of the `n`-th sample.
    pub(super) fn set_history_len(&mut self, n: usize, len: usize) {
        self.h_state_length[n] = len as f32;
        self.h_next_state_length[n] = len as f32;
    }

    /// Returns the number of samples in the batch.
    pub fn len(&self) -> usize {
        self.reward.len()
    }

    /// Returns `true` if the batch has no sample.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the history windows.
    pub fn max_his_len(&self) -> usize {
        self.h_state.shape()[1]
    }

    /// Returns dynamic-dimensional views of the fields, in the order of [`HistoryBatch::KEYS`].
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ArrayViewD<'_, f32>)> {
        let views = vec![
            self.state.view().into_dyn(),
            self.next_state.view().into_dyn(),
            self.action.view().into_dyn(),
            self.reward.view().into_dyn(),
            self.done.view().into_dyn(),
            self.h_state.view().into_dyn(),
            self.h_action.view().into_dyn(),
            self.h_next_state.view().into_dyn(),
            self.h_next_action.view().into_dyn(),
            self.h_state_length.view().into_dyn(),
            self.h_next_state_length.view().into_dyn(),
        ];
        Self::KEYS.to_vec().into_iter().zip(views)
    }

    /// Converts the batch into a mapping from field names to arrays.
    ///
    /// `ix_sample` is dropped.
    pub fn into_map(self) -> BTreeMap<&'static str, ArrayD<f32>> {
        let arrays = vec![
            self.state.into_dyn(),
            self.next_state.into_dyn(),
            self.action.into_dyn(),
            self.reward.into_dyn(),
            self.done.into_dyn(),
            self.h_state.into_dyn(),
            self.h_action.into_dyn(),
            self.h_next_state.into_dyn(),
            self.h_next_action.into_dyn(),
            self.h_state_length.into_dyn(),
            self.h_next_state_length.into_dyn(),
        ];
        Self::KEYS.to_vec().into_iter().zip(arrays).collect()
    }
}
