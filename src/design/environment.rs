use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::config::EnvConfig;
use crate::constants::{MAX_MOTIF_LENGTH, MAX_SEQUENCE_LENGTH, MIN_MOTIF_LENGTH, MIN_SEQUENCE_LENGTH};
use crate::design::observation::Observation;
use crate::design::reward::{self, RewardComponents};
use crate::design::sequence::{Motif, Sequence};
use crate::env::{ActionSpace, Env, EnvError, ObservationSpace, ResetOptions, Transition};
use crate::symbols::{NUM_SYMBOLS, Symbol, charge_of};

/// Auxiliary per-call information. Always empty for now.
pub type Info = serde_json::Map<String, serde_json::Value>;

/// Sequence-design environment.
///
/// The agent appends one amino acid per step. It is rewarded for embedding
/// the motif contiguously and in order, and penalised if the finished
/// sequence is not neutral. Motif and target length are either fixed by the
/// config or redrawn at every reset from the environment's own RNG, which is
/// seeded once at construction and never reseeded implicitly.
pub struct ProteinDesignEnv {
    config: EnvConfig,
    rng: ChaCha8Rng,
    motif: Motif,
    target_length: usize,
    sequence: Sequence,
}

impl ProteinDesignEnv {
    /// Default motif, target length and reward constants.
    pub fn new(
        seed: u64,
        change_motif_at_each_episode: bool,
        change_sequence_length_at_each_episode: bool,
    ) -> Self {
        Self::build(EnvConfig::new(
            seed,
            change_motif_at_each_episode,
            change_sequence_length_at_each_episode,
        ))
    }

    pub fn from_config(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    // `config` must already be valid.
    fn build(config: EnvConfig) -> Self {
        let motif = Motif::from_slice(&config.default_motif).unwrap_or_default();
        let target_length = config.default_sequence_length;
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            motif,
            target_length,
            sequence: Sequence::new(),
        }
    }

    /// Starts a new episode. A `seed` reseeds the RNG before the motif and
    /// target length are drawn.
    pub fn reset(&mut self, seed: Option<u64>, _options: Option<&ResetOptions>) -> (Observation, Info) {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.generate_motif();
        self.generate_target_length();
        self.sequence.clear();
        debug!(
            motif = ?self.motif,
            target_length = self.target_length,
            "episode reset"
        );
        (self.observation(), Info::new())
    }

    /// Appends the symbol selected by the zero-based `action`.
    ///
    /// Fails without touching the state if the action is outside the alphabet
    /// or the episode has already reached its target length.
    pub fn step(&mut self, action: i64) -> Result<Transition<Observation, Info>, EnvError> {
        let symbol = Self::symbol_for(action).inspect_err(|err| warn!(%err, "rejected action"))?;
        if self.is_done() {
            return Err(EnvError::EpisodeFinished {
                length: self.sequence.len(),
            });
        }
        self.sequence
            .push(symbol)
            .map_err(|_| EnvError::EpisodeFinished {
                length: self.sequence.len(),
            })?;

        let components = self.reward_components();
        let reward = components.total();
        let terminated = self.is_done();
        trace!(
            %symbol,
            length = self.sequence.len(),
            reward,
            terminated,
            "step"
        );
        Ok((self.observation(), reward, terminated, terminated, Info::new()))
    }

    fn symbol_for(action: i64) -> Result<Symbol, EnvError> {
        let id = action.saturating_add(1);
        u8::try_from(id)
            .ok()
            .and_then(Symbol::from_id)
            .ok_or(EnvError::InvalidAction { action, id })
    }

    fn generate_motif(&mut self) {
        if !self.config.variable_motif {
            return;
        }
        let len = self.rng.gen_range(MIN_MOTIF_LENGTH..=MAX_MOTIF_LENGTH);
        let mut motif = Motif::new();
        for _ in 0..len {
            let symbol = Symbol::ALL[self.rng.gen_range(0..NUM_SYMBOLS)];
            if motif.push(symbol).is_err() {
                break;
            }
        }
        self.motif = motif;
    }

    fn generate_target_length(&mut self) {
        if self.config.variable_length {
            self.target_length = self.rng.gen_range(MIN_SEQUENCE_LENGTH..=MAX_SEQUENCE_LENGTH);
        }
    }

    /// Current observation, rebuilt from scratch.
    pub fn observation(&self) -> Observation {
        Observation::encode(&self.sequence, &self.motif, self.target_length, self.charge())
    }

    /// Reward breakdown for the current state.
    pub fn reward_components(&self) -> RewardComponents {
        reward::compute(
            self.sequence.as_slice(),
            self.motif.as_slice(),
            self.target_length,
            &self.config.reward,
        )
    }

    pub fn charge(&self) -> i32 {
        charge_of(self.sequence.as_slice())
    }

    pub fn sequence(&self) -> &[Symbol] {
        self.sequence.as_slice()
    }

    pub fn motif(&self) -> &[Symbol] {
        self.motif.as_slice()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn is_done(&self) -> bool {
        self.sequence.len() >= self.target_length
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::new(NUM_SYMBOLS)
    }

    pub fn observation_space(&self) -> ObservationSpace {
        Observation::space()
    }
}

impl Env for ProteinDesignEnv {
    type Obs = Observation;
    type Act = i64;
    type Info = Info;

    fn reset(&mut self, seed: Option<u64>, options: Option<&ResetOptions>) -> (Observation, Info) {
        ProteinDesignEnv::reset(self, seed, options)
    }

    fn step(&mut self, act: i64) -> Result<Transition<Observation, Info>, EnvError> {
        ProteinDesignEnv::step(self, act)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHARGE_PENALTY, DEFAULT_MOTIF, DEFAULT_SEQUENCE_LENGTH};
    use crate::symbols::Symbol::*;

    fn env_with(motif: &[Symbol], target_length: usize) -> ProteinDesignEnv {
        let mut env = ProteinDesignEnv::new(0, false, false);
        env.motif = Motif::from_slice(motif).unwrap();
        env.target_length = target_length;
        env
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn fixed_parameters_survive_reset() {
        let mut env = ProteinDesignEnv::new(3, false, false);
        for _ in 0..5 {
            let (obs, info) = env.reset(None, None);
            assert_eq!(env.motif(), DEFAULT_MOTIF);
            assert_eq!(env.target_length(), DEFAULT_SEQUENCE_LENGTH);
            assert!(env.sequence().is_empty());
            assert!(info.is_empty());
            assert_eq!(obs, env.observation());
        }
    }

    #[test]
    fn randomised_parameters_stay_in_bounds() {
        let mut env = ProteinDesignEnv::new(11, true, true);
        for _ in 0..50 {
            env.reset(None, None);
            let motif = env.motif();
            assert!((MIN_MOTIF_LENGTH..=MAX_MOTIF_LENGTH).contains(&motif.len()));
            assert!(motif.iter().all(|s| (1..=NUM_SYMBOLS as u8).contains(&s.id())));
            assert!((MIN_SEQUENCE_LENGTH..=MAX_SEQUENCE_LENGTH).contains(&env.target_length()));
        }
    }

    #[test]
    fn invalid_actions_leave_state_untouched() {
        let mut env = env_with(&[Arginine, Lysine], 5);
        env.reset(None, None);
        env.step(4).unwrap();
        let before = env.observation();

        for action in [-1, -5, 20, 21, i64::MIN, i64::MAX] {
            let err = env.step(action).unwrap_err();
            assert!(matches!(err, EnvError::InvalidAction { action: a, .. } if a == action));
            assert_eq!(env.sequence(), &[Cysteine]);
            assert_eq!(env.observation(), before);
        }
    }

    #[test]
    fn step_after_termination_is_rejected() {
        let mut env = env_with(&[Arginine, Lysine], 2);
        env.reset(None, None);
        env.step(0).unwrap();
        let (_, _, terminated, truncated, _) = env.step(0).unwrap();
        assert!(terminated && truncated);

        let err = env.step(0).unwrap_err();
        assert!(matches!(err, EnvError::EpisodeFinished { length: 2 }));
        assert_eq!(env.sequence().len(), 2);
    }

    #[test]
    fn observation_is_idempotent() {
        let mut env = ProteinDesignEnv::new(5, true, true);
        env.reset(None, None);
        env.step(4).unwrap();
        env.step(11).unwrap();
        assert_eq!(env.observation(), env.observation());
    }

    #[test]
    fn scenario_rewards() {
        let mut env = env_with(&[Arginine, Lysine, Arginine], 3);
        env.reset(None, None);
        assert_eq!(env.motif(), &[Arginine, Lysine, Arginine]);

        let (_, reward, terminated, truncated, _) = env.step(0).unwrap();
        assert_eq!(env.sequence(), &[Alanine]);
        assert_eq!(reward, 0.0);
        assert!(!terminated && !truncated);

        let (obs, reward, terminated, _, _) = env.step(1).unwrap();
        assert_eq!(env.sequence(), &[Alanine, Arginine]);
        assert!(close(reward, 2.0 / 15.0));
        assert!(!terminated);
        assert_eq!(obs.charge(), 1.0);

        let (obs, reward, terminated, truncated, _) = env.step(4).unwrap();
        assert_eq!(env.sequence(), &[Alanine, Arginine, Cysteine]);
        assert!(close(reward, CHARGE_PENALTY + 2.0 / 15.0));
        assert!(terminated && truncated);
        assert_eq!(&obs.padded_sequence()[..3], &[1.0, 2.0, 5.0]);
        assert_eq!(obs.sequence_length(), 3.0);
        assert_eq!(obs.target_length(), 3.0);
    }

    #[test]
    fn same_seed_same_episodes() {
        let mut a = ProteinDesignEnv::new(99, true, true);
        let mut b = ProteinDesignEnv::new(99, true, true);
        for _ in 0..10 {
            assert_eq!(a.reset(None, None).0, b.reset(None, None).0);
        }
    }

    #[test]
    fn reset_seed_pins_a_single_episode() {
        let mut a = ProteinDesignEnv::new(1, true, true);
        let mut b = ProteinDesignEnv::new(2, true, true);
        b.reset(None, None);
        b.reset(None, None);
        assert_eq!(a.reset(Some(7), None).0, b.reset(Some(7), None).0);
    }

    #[test]
    fn from_config_rejects_invalid() {
        let config = EnvConfig {
            default_sequence_length: 0,
            ..EnvConfig::default()
        };
        assert!(matches!(
            ProteinDesignEnv::from_config(config),
            Err(EnvError::InvalidConfig(_))
        ));
    }
}
