use rand::Rng;
use serde::{Deserialize, Serialize};

/// `n` discrete actions numbered `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    pub n: usize,
}

impl ActionSpace {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn contains(&self, action: i64) -> bool {
        usize::try_from(action).is_ok_and(|a| a < self.n)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.gen_range(0..self.n) as i64
    }
}

/// Box of `shape` elements, each within `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub low: f64,
    pub high: f64,
    pub shape: usize,
}

impl ObservationSpace {
    pub fn symmetric(bound: f64, shape: usize) -> Self {
        Self {
            low: -bound,
            high: bound,
            shape,
        }
    }

    pub fn contains(&self, obs: &[f64]) -> bool {
        obs.len() == self.shape && obs.iter().all(|v| (self.low..=self.high).contains(v))
    }
}
