//! Sequence-design reinforcement learning environment.
//!
//! An agent builds an amino-acid sequence one symbol per step. It is rewarded
//! for embedding a target motif contiguously and in order, and penalised if
//! the finished sequence carries a net charge. [`ProteinDesignEnv`] is the
//! engine; everything else here drives or exposes it.

pub mod config;
pub mod constants;
pub mod design;
pub mod env;
pub mod logging;
pub mod registry;
pub mod rollout;
pub mod symbols;

#[cfg(feature = "python")]
mod python;

pub use config::{ConfigError, EnvConfig};
pub use design::{Observation, ProteinDesignEnv, RewardComponents, RewardConfig};
pub use env::{Env, EnvError, VecEnv};
pub use registry::make;
pub use symbols::Symbol;
