mod errors;
mod policy;
mod runner;

pub use errors::RolloutError;
pub use policy::{Policy, RandomPolicy};
pub use runner::{DesignTrajectory, RolloutStats, collect, collect_parallel, run_episode};
