use crate::env::errors::EnvError;

/// Open key/value bag passed to `reset`. No keys are interpreted yet.
pub type ResetOptions = serde_json::Map<String, serde_json::Value>;

/// `(obs, reward, terminated, truncated, info)`
pub type Transition<O, I> = (O, f64, bool, bool, I);

/// Gym-style environment.
///
/// `reset` starts a new episode and cannot fail. `step` advances it by one
/// action; a rejected action must leave the environment untouched so the
/// caller can retry.
pub trait Env: Send {
    type Obs: Send + Clone + 'static;
    type Act: Send + Clone + 'static;
    type Info: Send + Clone + 'static;

    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&ResetOptions>,
    ) -> (Self::Obs, Self::Info);

    fn step(&mut self, act: Self::Act) -> Result<Transition<Self::Obs, Self::Info>, EnvError>;
}
