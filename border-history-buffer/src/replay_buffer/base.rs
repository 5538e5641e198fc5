//! Replay buffer producing history windows.
use super::{rows::Rows, HistoryBatch, HistoryReplayBufferConfig, HistorySegment, Transition};
use crate::{error::HistoryBufferError, ExperienceBufferBase, ReplayBufferBase};
use anyhow::Result;
use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A fixed-capacity replay buffer for history-conditioned agents.
///
/// Transitions are kept in insertion order. Once the buffer is full, each new
/// transition evicts the oldest one. Storage is a ring, so eviction costs O(1);
/// chronological index `k` (0 is the oldest transition) lives in physical slot
/// `(oldest + k) % capacity`.
///
/// The buffer owns its random number generator, seeded once in
/// [`build`](ReplayBufferBase::build). Sampling results therefore only depend on
/// the seed and on the sequence of calls made on this buffer.
///
/// `add` and the sampling methods take `&mut self`; sharing the buffer across
/// threads requires wrapping it in a lock.
pub struct HistoryReplayBuffer {
    capacity: usize,

    /// Physical slot of the next insertion.
    i: usize,

    size: usize,
    state: Rows,
    action: Rows,
    next_state: Rows,
    reward: Vec<f32>,
    is_done: Vec<i8>,
    max_his_len: usize,
    rng: StdRng,
}

impl HistoryReplayBuffer {
    #[inline]
    fn check_dim(field: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(HistoryBufferError::InvalidArgument {
                field,
                expected,
                actual,
            }
            .into());
        }
        Ok(())
    }

    /// Physical slot of the oldest transition.
    #[inline]
    fn oldest(&self) -> usize {
        if self.size == self.capacity {
            self.i
        } else {
            0
        }
    }

    /// Physical slot of the transition at chronological index `k`.
    #[inline]
    fn slot(&self, k: usize) -> usize {
        (self.oldest() + k) % self.capacity
    }

    #[inline]
    fn is_done_at(&self, k: usize) -> bool {
        self.is_done[self.slot(k)] == 1
    }

    fn check_sampling_range(&self, max_his_len: usize) -> Result<()> {
        if self.size <= max_his_len {
            return Err(HistoryBufferError::InsufficientData {
                len: self.size,
                max_his_len,
            }
            .into());
        }
        Ok(())
    }

    /// Adds a transition.
    ///
    /// If the buffer is full, the oldest transition is evicted.
    ///
    /// # Errors
    ///
    /// Fails with [`HistoryBufferError::InvalidArgument`] if the length of `state`,
    /// `action` or `next_state` differs from the configured dimension. The buffer
    /// is left unchanged in that case.
    pub fn add(
        &mut self,
        state: &[f32],
        action: &[f32],
        reward: f32,
        is_done: bool,
        next_state: &[f32],
    ) -> Result<()> {
        Self::check_dim("state", self.state.dim(), state.len())?;
        Self::check_dim("action", self.action.dim(), action.len())?;
        Self::check_dim("next_state", self.next_state.dim(), next_state.len())?;

        let i = self.i;
        self.state.push(i, state);
        self.action.push(i, action);
        self.next_state.push(i, next_state);
        self.reward[i] = reward;
        self.is_done[i] = is_done as i8;

        self.i = (self.i + 1) % self.capacity;
        if self.size < self.capacity {
            self.size += 1;
            if self.size == self.capacity {
                debug!(
                    "Replay buffer reached its capacity ({}), the oldest transitions will be evicted",
                    self.capacity
                );
            }
        }

        Ok(())
    }

    /// Returns the transition at chronological index `k`, where 0 is the oldest one.
    pub fn get(&self, k: usize) -> Option<Transition> {
        if k >= self.size {
            return None;
        }
        let i = self.slot(k);
        Some(Transition {
            state: self.state.row(i).to_vec(),
            action: self.action.row(i).to_vec(),
            reward: self.reward[i],
            is_done: self.is_done[i] == 1,
            next_state: self.next_state.row(i).to_vec(),
        })
    }

    /// Samples a batch of `batch_size` transitions with their history windows.
    ///
    /// Anchors are drawn uniformly with replacement from `[max_his_len, len)`.
    /// See [`HistoryBatch`] for the layout of the result.
    ///
    /// # Errors
    ///
    /// Fails with [`HistoryBufferError::InsufficientData`] unless the buffer holds
    /// more than `max_his_len` transitions.
    pub fn sample_batch(&mut self, batch_size: usize, max_his_len: usize) -> Result<HistoryBatch> {
        self.check_sampling_range(max_his_len)?;

        let (low, high) = (max_his_len, self.size);
        let ixs = (0..batch_size)
            .map(|_| self.rng.gen_range(low..high))
            .collect::<Vec<_>>();
        trace!(
            "Sampled {} anchors from [{}, {}) with max_his_len={}",
            batch_size,
            low,
            high,
            max_his_len
        );

        Ok(self.assemble(ixs, max_his_len))
    }

    /// Builds a batch from the given anchors, given as chronological indices.
    ///
    /// Unlike [`sample_batch`](Self::sample_batch), it does not consume random numbers.
    ///
    /// # Errors
    ///
    /// Fails with [`HistoryBufferError::InsufficientData`] as `sample_batch` does, and
    /// with [`HistoryBufferError::AnchorOutOfRange`] if an anchor is outside of
    /// `[max_his_len, len)`.
    pub fn sample_batch_at(&self, ixs: &[usize], max_his_len: usize) -> Result<HistoryBatch> {
        self.check_sampling_range(max_his_len)?;

        let (low, high) = (max_his_len, self.size);
        if let Some(&anchor) = ixs.iter().find(|&&ix| ix < low || ix >= high) {
            return Err(HistoryBufferError::AnchorOutOfRange { anchor, low, high }.into());
        }

        Ok(self.assemble(ixs.to_vec(), max_his_len))
    }

    /// Gathers the fields of the anchors `ixs` and their history windows.
    ///
    /// Every anchor must be in `[max_his_len, len)`.
    fn assemble(&self, ixs: Vec<usize>, max_his_len: usize) -> HistoryBatch {
        let mut batch = HistoryBatch::zeros(
            ixs.len(),
            max_his_len,
            self.state.dim(),
            self.action.dim(),
        );
        let newest = self.size - 1;

        for (n, &ix) in ixs.iter().enumerate() {
            let i = self.slot(ix);
            batch.set_step(
                n,
                self.state.row(i),
                self.action.row(i),
                self.reward[i],
                self.is_done[i] == 1,
                self.next_state.row(i),
            );

            let seg = HistorySegment::locate(|k| self.is_done_at(k), ix, max_his_len);
            for t in 0..max_his_len {
                let k = seg.source(t, max_his_len);
                // An empty segment pads with the anchor, whose successor may not be stored yet
                let k_next = (k + 1).min(newest);
                let (j, j_next) = (self.slot(k), self.slot(k_next));
                batch.set_history_row(
                    n,
                    t,
                    self.state.row(j),
                    self.action.row(j),
                    self.next_state.row(j),
                    self.action.row(j_next),
                );
            }
            batch.set_history_len(n, seg.len);
        }

        batch.ix_sample = ixs;
        batch
    }

    /// Returns the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the dimension of states.
    pub fn state_dim(&self) -> usize {
        self.state.dim()
    }

    /// Returns the dimension of actions.
    pub fn action_dim(&self) -> usize {
        self.action.dim()
    }

    /// Returns `true` if the next insertion evicts a transition.
    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Returns the number of stored transitions with the done flag.
    pub fn num_done_flags(&self) -> usize {
        (0..self.size).filter(|&k| self.is_done_at(k)).count()
    }

    /// Returns the sum of the rewards of stored transitions.
    pub fn sum_rewards(&self) -> f32 {
        (0..self.size).map(|k| self.reward[self.slot(k)]).sum()
    }

    /// Removes all transitions. Allocated memory and the state of the random
    /// number generator are kept.
    pub fn clear(&mut self) {
        self.i = 0;
        self.size = 0;
        self.is_done.iter_mut().for_each(|d| *d = 0);
    }
}

impl ExperienceBufferBase for HistoryReplayBuffer {
    type Item = Transition;

    fn len(&self) -> usize {
        self.size
    }

    fn push(&mut self, tr: Self::Item) -> Result<()> {
        self.add(
            &tr.state,
            &tr.action,
            tr.reward,
            tr.is_done,
            &tr.next_state,
        )
    }
}

impl ReplayBufferBase for HistoryReplayBuffer {
    type Config = HistoryReplayBufferConfig;
    type Batch = HistoryBatch;

    fn build(config: &Self::Config) -> Result<Self> {
        config.validate()?;
        let capacity = config.capacity;
        info!(
            "Build replay buffer: capacity={}, state_dim={}, action_dim={}, seed={}",
            capacity, config.state_dim, config.action_dim, config.seed
        );

        Ok(Self {
            capacity,
            i: 0,
            size: 0,
            state: Rows::new(capacity, config.state_dim),
            action: Rows::new(capacity, config.action_dim),
            next_state: Rows::new(capacity, config.state_dim),
            reward: vec![0.; capacity],
            is_done: vec![0; capacity],
            max_his_len: config.max_his_len,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Samples a batch with the history length given in the configuration.
    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        self.sample_batch(size, self.max_his_len)
    }
}
