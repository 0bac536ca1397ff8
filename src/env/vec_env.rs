use super::{Env, EnvError, ResetOptions, Transition};

/// A batch of independent environments stepped in lockstep.
///
/// Each member owns its own state and RNG; nothing is shared between them.
pub struct VecEnv<E> {
    envs: Vec<E>,
}

impl<E: Env> VecEnv<E> {
    /// Builds `num_envs` environments. `make_env` receives the member index,
    /// which callers typically fold into the seed.
    pub fn new<F>(make_env: F, num_envs: usize) -> Self
    where
        F: Fn(usize) -> E,
    {
        let envs = (0..num_envs).map(make_env).collect();
        Self { envs }
    }

    pub fn from_envs(envs: Vec<E>) -> Self {
        Self { envs }
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    pub fn envs(&self) -> &[E] {
        &self.envs
    }

    /// Resets every member. With a base seed, member `i` is reseeded with `seed + i`.
    pub fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&ResetOptions>,
    ) -> Vec<(E::Obs, E::Info)> {
        self.envs
            .iter_mut()
            .enumerate()
            .map(|(i, env)| env.reset(seed.map(|s| s.wrapping_add(i as u64)), options))
            .collect()
    }

    /// Steps every member with its action. Stops at the first failing member;
    /// members before it have already advanced.
    pub fn step(
        &mut self,
        actions: Vec<E::Act>,
    ) -> Result<Vec<Transition<E::Obs, E::Info>>, EnvError> {
        if actions.len() != self.envs.len() {
            return Err(EnvError::ActionCountMismatch {
                expected: self.envs.len(),
                got: actions.len(),
            });
        }

        self.envs
            .iter_mut()
            .zip(actions)
            .map(|(env, action)| env.step(action))
            .collect()
    }
}
