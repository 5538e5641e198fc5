//! Fills a history replay buffer with a random walk and samples batches.
//!
//! Run with `RUST_LOG=debug` to see the buffer's log messages.
use anyhow::Result;
use border_history_buffer::{
    ExperienceBufferBase, HistoryReplayBuffer, HistoryReplayBufferConfig, ReplayBufferBase,
    Transition,
};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

const STATE_DIM: usize = 4;
const ACTION_DIM: usize = 2;
const CAPACITY: usize = 1000;
const MAX_STEPS: usize = 3000;
const MAX_EPISODE_LEN: usize = 50;
const BATCH_SIZE: usize = 16;
const MAX_HIS_LEN: usize = 10;

/// A random walk whose state drifts with the action and terminates at random.
struct RandomWalk {
    state: Vec<f32>,
    t: usize,
    rng: StdRng,
}

impl RandomWalk {
    fn new(seed: u64) -> Self {
        Self {
            state: vec![0.; STATE_DIM],
            t: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample_act(&mut self) -> Vec<f32> {
        (0..ACTION_DIM).map(|_| self.rng.gen_range(-1f32..1.)).collect()
    }

    fn step(&mut self, act: &[f32]) -> Transition {
        let rng = &mut self.rng;
        let next_state = self
            .state
            .iter()
            .enumerate()
            .map(|(i, s)| s + act[i % ACTION_DIM] + rng.gen_range(-0.1f32..0.1))
            .collect::<Vec<f32>>();
        let reward = -next_state.iter().map(|s| s * s).sum::<f32>().sqrt();
        self.t += 1;
        let is_done = self.t == MAX_EPISODE_LEN || self.rng.gen_bool(0.02);

        let tr = Transition::new(
            self.state.clone(),
            act.to_vec(),
            reward,
            is_done,
            next_state.clone(),
        );

        if is_done {
            self.state = vec![0.; STATE_DIM];
            self.t = 0;
        } else {
            self.state = next_state;
        }
        tr
    }
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"))
        .try_init();

    let config = HistoryReplayBufferConfig::default()
        .capacity(CAPACITY)
        .state_dim(STATE_DIM)
        .action_dim(ACTION_DIM)
        .max_his_len(MAX_HIS_LEN);
    let mut buffer = HistoryReplayBuffer::build(&config)?;
    let mut env = RandomWalk::new(0);

    for step in 1..=MAX_STEPS {
        let act = env.sample_act();
        buffer.push(env.step(&act))?;

        if buffer.len() > MAX_HIS_LEN && step % 500 == 0 {
            let batch = buffer.batch(BATCH_SIZE)?;
            let mean_len = batch.h_state_length.mean().unwrap_or(0.);
            info!(
                "step {}: {} transitions, {} episode ends, mean history length {:.2}",
                step,
                buffer.len(),
                buffer.num_done_flags(),
                mean_len
            );
        }
    }

    let batch = buffer.sample_batch(BATCH_SIZE, MAX_HIS_LEN)?;
    for (key, arr) in batch.iter() {
        println!("{:>20}: {:?}", key, arr.shape());
    }

    Ok(())
}
