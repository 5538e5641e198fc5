//! A single environment step.

/// A transition `(s_t, a_t, r_t, done_t, s_t+1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// State `s_t`.
    pub state: Vec<f32>,

    /// Action `a_t`.
    pub action: Vec<f32>,

    /// Reward `r_t`.
    pub reward: f32,

    /// `true` if the episode ended at this step.
    pub is_done: bool,

    /// Next state `s_t+1`.
    pub next_state: Vec<f32>,
}

impl Transition {
    /// Creates a transition.
    pub fn new(
        state: Vec<f32>,
        action: Vec<f32>,
        reward: f32,
        is_done: bool,
        next_state: Vec<f32>,
    ) -> Self {
        Self {
            state,
            action,
            reward,
            is_done,
            next_state,
        }
    }
}
