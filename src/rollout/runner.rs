use std::time::{Duration, Instant};

use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, info};

use super::errors::RolloutError;
use super::policy::{Policy, RandomPolicy};
use crate::config::EnvConfig;
use crate::constants::MAX_SEQUENCE_LENGTH;
use crate::design::{Observation, ProteinDesignEnv};
use crate::env::{Env, Step, Trajectory};

pub type DesignTrajectory = Trajectory<Observation, i64>;

#[derive(Debug, Clone, Serialize)]
pub struct RolloutStats {
    pub total_steps: u64,
    pub total_episodes: u64,
    pub mean_reward: f64,
    pub mean_final_reward: f64,
    pub elapsed: Duration,
}

impl RolloutStats {
    pub fn from_trajectories<O, A>(trajectories: &[Trajectory<O, A>], elapsed: Duration) -> Self {
        let total_episodes = trajectories.len() as u64;
        let total_steps = trajectories.iter().map(|t| t.len() as u64).sum();
        let (mean_reward, mean_final_reward) = if trajectories.is_empty() {
            (0.0, 0.0)
        } else {
            let n = trajectories.len() as f64;
            let total: f64 = trajectories.iter().map(Trajectory::total_reward).sum();
            let last: f64 = trajectories.iter().filter_map(Trajectory::final_reward).sum();
            (total / n, last / n)
        };
        Self {
            total_steps,
            total_episodes,
            mean_reward,
            mean_final_reward,
            elapsed,
        }
    }
}

/// Plays one episode to termination and records every transition.
///
/// Fails if the environment rejects an action or has not terminated after
/// `max_steps` steps.
pub fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    seed: Option<u64>,
    max_steps: usize,
) -> Result<Trajectory<E::Obs, E::Act>, RolloutError>
where
    E: Env,
    E::Info: Into<serde_json::Value>,
    P: Policy<E::Obs, E::Act>,
{
    let (mut obs, _info) = env.reset(seed, None);
    let mut trajectory = Trajectory::new(obs.clone());

    for _ in 0..max_steps {
        let act = policy.act(&obs);
        let (next_obs, rew, terminated, truncated, info) = env.step(act.clone())?;
        trajectory.steps.push(Step {
            obs: next_obs.clone(),
            act,
            rew,
            terminated,
            truncated,
            info: info.into(),
        });
        if terminated || truncated {
            return Ok(trajectory);
        }
        obs = next_obs;
    }

    Err(RolloutError::StepLimit(max_steps))
}

/// Plays `episodes` random episodes on one environment built from `config`.
pub fn collect(config: &EnvConfig, episodes: usize) -> Result<Vec<DesignTrajectory>, RolloutError> {
    let mut env = ProteinDesignEnv::from_config(config.clone())?;
    let mut policy = RandomPolicy::new(env.action_space(), config.seed);

    let mut trajectories = Vec::with_capacity(episodes);
    for episode in 0..episodes {
        let trajectory = run_episode(&mut env, &mut policy, None, MAX_SEQUENCE_LENGTH)?;
        debug!(
            seed = config.seed,
            episode,
            steps = trajectory.len(),
            reward = trajectory.total_reward(),
            "episode finished"
        );
        trajectories.push(trajectory);
    }
    Ok(trajectories)
}

/// Runs `streams` independent [`collect`] calls on the blocking pool.
///
/// Stream `i` owns its own environment and policy, seeded `config.seed + i`,
/// so the result for each stream does not depend on scheduling.
pub async fn collect_parallel(
    config: &EnvConfig,
    streams: usize,
    episodes_per_stream: usize,
) -> Result<Vec<Vec<DesignTrajectory>>, RolloutError> {
    let started = Instant::now();
    let workers = (0..streams).map(|stream| {
        let mut stream_config = config.clone();
        stream_config.seed = config.seed.wrapping_add(stream as u64);
        tokio::task::spawn_blocking(move || collect(&stream_config, episodes_per_stream))
    });

    let per_stream = try_join_all(workers)
        .await?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        streams,
        episodes = streams * episodes_per_stream,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "parallel rollout finished"
    );
    Ok(per_stream)
}
