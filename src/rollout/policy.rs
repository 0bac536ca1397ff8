use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::env::ActionSpace;

const POLICY_STREAM: u64 = 1;

/// Chooses the next action from the latest observation.
pub trait Policy<O, A> {
    fn act(&mut self, obs: &O) -> A;
}

/// Samples actions uniformly, ignoring the observation.
///
/// Draws from stream 1 of the seeded generator; environments use stream 0,
/// so a policy and an environment built from the same seed stay independent.
pub struct RandomPolicy {
    space: ActionSpace,
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(space: ActionSpace, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(POLICY_STREAM);
        Self { space, rng }
    }
}

impl<O> Policy<O, i64> for RandomPolicy {
    fn act(&mut self, _obs: &O) -> i64 {
        self.space.sample(&mut self.rng)
    }
}
