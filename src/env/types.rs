use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step<O, A> {
    pub obs: O,
    pub act: A,
    pub rew: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: serde_json::Value,
}

impl<O, A> Step<O, A> {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// One recorded episode. `steps[i].obs` is the observation *after* `steps[i].act`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<O, A> {
    pub id: Uuid,
    pub initial_obs: O,
    pub steps: Vec<Step<O, A>>,
}

impl<O, A> Trajectory<O, A> {
    pub fn new(initial_obs: O) -> Self {
        Self {
            id: Uuid::new_v4(),
            initial_obs,
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_reward(&self) -> f64 {
        self.steps.iter().map(|step| step.rew).sum()
    }

    pub fn final_reward(&self) -> Option<f64> {
        self.steps.last().map(|step| step.rew)
    }

    pub fn is_complete(&self) -> bool {
        self.steps.last().is_some_and(Step::done)
    }

    pub fn final_obs(&self) -> &O {
        self.steps.last().map_or(&self.initial_obs, |step| &step.obs)
    }
}
