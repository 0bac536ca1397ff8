// src/bin/rollout.rs
//
// Plays random episodes of the sequence-design environment and prints the
// terminal sequences. Thin driver around the library.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use protein_design::rollout::{self, DesignTrajectory, RolloutStats};
use protein_design::{EnvConfig, Symbol, config, logging};

#[derive(Parser, Debug)]
#[command(name = "rollout", about = "Random rollouts of the protein design environment")]
struct Cli {
    /// JSON environment config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Redraw the motif at every episode (`--variable-motif false` turns it off).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    variable_motif: Option<bool>,

    /// Redraw the target length at every episode.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    variable_length: Option<bool>,

    /// Episodes per stream.
    #[arg(long, default_value_t = 1)]
    episodes: usize,

    /// Independent environments run in parallel.
    #[arg(long, default_value_t = 1)]
    streams: usize,

    /// Print trajectories as JSON instead of a summary.
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log: String,
}

fn build_config(cli: &Cli) -> Result<EnvConfig> {
    let env_config = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EnvConfig::default(),
    };
    Ok(apply_overrides(cli, env_config))
}

fn apply_overrides(cli: &Cli, mut env_config: EnvConfig) -> EnvConfig {
    if let Some(seed) = cli.seed {
        env_config.seed = seed;
    }
    if let Some(variable_motif) = cli.variable_motif {
        env_config.variable_motif = variable_motif;
    }
    if let Some(variable_length) = cli.variable_length {
        env_config.variable_length = variable_length;
    }
    env_config
}

fn symbol_names(obs: &[f64]) -> Vec<&'static str> {
    obs.iter()
        .filter_map(|&id| Symbol::from_id(id as u8))
        .map(Symbol::name)
        .collect()
}

fn print_summary(trajectory: &DesignTrajectory) {
    let obs = trajectory.final_obs();
    let motif = symbol_names(obs.padded_motif());
    let state = symbol_names(obs.padded_sequence());
    println!("Motif          : {motif:?}");
    println!("Terminal state : {state:?}");
    println!("Charge         : {}", obs.charge());
    println!("Reward of      : {}", trajectory.final_reward().unwrap_or(0.0));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let env_config = build_config(&cli)?;
    info!(
        env = %env_config.env_name,
        seed = env_config.seed,
        variable_motif = env_config.variable_motif,
        variable_length = env_config.variable_length,
        "starting rollout"
    );

    let started = Instant::now();
    let per_stream = rollout::collect_parallel(&env_config, cli.streams, cli.episodes).await?;
    let trajectories: Vec<DesignTrajectory> = per_stream.into_iter().flatten().collect();
    let stats = RolloutStats::from_trajectories(&trajectories, started.elapsed());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&trajectories)?);
    } else {
        for trajectory in &trajectories {
            print_summary(trajectory);
        }
    }

    info!(
        episodes = stats.total_episodes,
        steps = stats.total_steps,
        mean_reward = stats.mean_reward,
        mean_final_reward = stats.mean_final_reward,
        "rollout finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rollout").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_config_both_ways() {
        let from_file = EnvConfig::new(5, true, true);

        let config = apply_overrides(&parse(&["--variable-motif", "false"]), from_file.clone());
        assert!(!config.variable_motif);
        assert!(config.variable_length);

        let config = apply_overrides(
            &parse(&["--variable-length=false", "--seed", "9"]),
            from_file.clone(),
        );
        assert!(config.variable_motif);
        assert!(!config.variable_length);
        assert_eq!(config.seed, 9);

        let config = apply_overrides(&parse(&[]), from_file.clone());
        assert_eq!(config, from_file);
    }

    #[test]
    fn bare_flag_turns_randomisation_on() {
        let config = apply_overrides(&parse(&["--variable-motif"]), EnvConfig::default());
        assert!(config.variable_motif);
        assert!(!config.variable_length);
    }
}
