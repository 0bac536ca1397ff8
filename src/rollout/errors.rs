use thiserror::Error;

use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum RolloutError {
    #[error("Environment error: {0}")]
    Env(#[from] EnvError),

    #[error("rollout worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("episode did not terminate within {0} steps")]
    StepLimit(usize),
}
