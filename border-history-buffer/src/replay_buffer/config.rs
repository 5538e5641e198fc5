//! Configuration of [`HistoryReplayBuffer`](super::HistoryReplayBuffer).
use crate::error::HistoryBufferError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`HistoryReplayBuffer`](super::HistoryReplayBuffer).
///
/// # Examples
///
/// ```rust
/// use border_history_buffer::HistoryReplayBufferConfig;
///
/// let config = HistoryReplayBufferConfig::default()
///     .capacity(50_000)
///     .state_dim(17)
///     .action_dim(6)
///     .seed(0);
/// assert_eq!(config.max_his_len, 10);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct HistoryReplayBufferConfig {
    /// Maximum number of transitions held in the buffer.
    /// When the buffer is full, a new transition replaces the oldest one.
    pub capacity: usize,

    /// Dimension of states and next states.
    pub state_dim: usize,

    /// Dimension of actions.
    pub action_dim: usize,

    /// Seed of the random number generator used for sampling.
    pub seed: u64,

    /// History length used by [`ReplayBufferBase::batch`](crate::ReplayBufferBase::batch).
    pub max_his_len: usize,
}

impl Default for HistoryReplayBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 1_000_000,
            state_dim: 24,
            action_dim: 2,
            seed: 123,
            max_his_len: 10,
        }
    }
}

impl HistoryReplayBufferConfig {
    /// Sets the capacity of the replay buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the dimension of states.
    pub fn state_dim(mut self, state_dim: usize) -> Self {
        self.state_dim = state_dim;
        self
    }

    /// Sets the dimension of actions.
    pub fn action_dim(mut self, action_dim: usize) -> Self {
        self.action_dim = action_dim;
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the default history length.
    pub fn max_his_len(mut self, max_his_len: usize) -> Self {
        self.max_his_len = max_his_len;
        self
    }

    /// Checks that a buffer can be built from the configuration.
    pub fn validate(&self) -> Result<(), HistoryBufferError> {
        if self.capacity == 0 {
            return Err(HistoryBufferError::ZeroCapacity);
        }
        Ok(())
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_default_config() {
        let config = HistoryReplayBufferConfig::default();
        assert_eq!(config.capacity, 1_000_000);
        assert_eq!(config.state_dim, 24);
        assert_eq!(config.action_dim, 2);
        assert_eq!(config.seed, 123);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity() {
        let config = HistoryReplayBufferConfig::default().capacity(0);
        assert_eq!(config.validate(), Err(HistoryBufferError::ZeroCapacity));
    }

    #[test]
    fn test_serde_history_replay_buffer_config() -> Result<()> {
        let config = HistoryReplayBufferConfig::default()
            .capacity(500)
            .state_dim(8)
            .action_dim(3)
            .seed(7)
            .max_his_len(4);

        let dir = TempDir::new("history_replay_buffer_config")?;
        let path = dir.path().join("history_replay_buffer_config.yaml");
        println!("{:?}", path);

        config.save(&path)?;
        let config_ = HistoryReplayBufferConfig::load(&path)?;
        assert_eq!(config, config_);

        Ok(())
    }
}
