use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_MOTIF, DEFAULT_SEQUENCE_LENGTH, ENV_ID, MAX_MOTIF_LENGTH, MAX_SEQUENCE_LENGTH,
};
use crate::design::RewardConfig;
use crate::env::EnvError;
use crate::registry::registered;
use crate::symbols::Symbol;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] EnvError),
}

/// Environment configuration, usually read from JSON.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub env_name: String,
    pub seed: u64,
    /// Redraw the motif at every reset.
    pub variable_motif: bool,
    /// Redraw the target length at every reset.
    pub variable_length: bool,
    /// Motif used while `variable_motif` is off.
    pub default_motif: Vec<Symbol>,
    /// Target length used while `variable_length` is off.
    pub default_sequence_length: usize,
    pub reward: RewardConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            env_name: ENV_ID.to_string(),
            seed: 0,
            variable_motif: false,
            variable_length: false,
            default_motif: DEFAULT_MOTIF.to_vec(),
            default_sequence_length: DEFAULT_SEQUENCE_LENGTH,
            reward: RewardConfig::default(),
        }
    }
}

impl EnvConfig {
    pub fn new(seed: u64, variable_motif: bool, variable_length: bool) -> Self {
        Self {
            seed,
            variable_motif,
            variable_length,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the preconditions the environment relies on.
    pub fn validate(&self) -> Result<(), EnvError> {
        if !registered().contains(&self.env_name.as_str()) {
            return Err(EnvError::UnknownEnvId(self.env_name.clone()));
        }
        let motif_len = self.default_motif.len();
        if !(1..=MAX_MOTIF_LENGTH).contains(&motif_len) {
            return Err(EnvError::InvalidConfig(format!(
                "default motif has {motif_len} symbols, expected 1..={MAX_MOTIF_LENGTH}"
            )));
        }
        if !(1..=MAX_SEQUENCE_LENGTH).contains(&self.default_sequence_length) {
            return Err(EnvError::InvalidConfig(format!(
                "default sequence length {} outside 1..={MAX_SEQUENCE_LENGTH}",
                self.default_sequence_length
            )));
        }
        let divisor = self.reward.partial_credit_divisor;
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(EnvError::InvalidConfig(format!(
                "partial credit divisor must be positive, got {divisor}"
            )));
        }
        if !self.reward.reward_per_motif.is_finite() || !self.reward.charge_penalty.is_finite() {
            return Err(EnvError::InvalidConfig("reward constants must be finite".into()));
        }
        Ok(())
    }
}

/// Reads and validates a JSON config file.
pub fn load(path: impl AsRef<Path>) -> Result<EnvConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    EnvConfig::from_json_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = EnvConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EnvConfig::default());
        assert_eq!(config.env_name, ENV_ID);
        assert_eq!(config.default_motif, DEFAULT_MOTIF.to_vec());
    }

    #[test]
    fn parses_fields_by_name() {
        let config = EnvConfig::from_json_str(
            r#"{
                "seed": 42,
                "variable_motif": true,
                "default_motif": ["ARGININE", "GLUTAMIC_ACID"],
                "default_sequence_length": 3,
                "reward": { "charge_penalty": -2.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 42);
        assert!(config.variable_motif);
        assert!(!config.variable_length);
        assert_eq!(config.default_motif, vec![Symbol::Arginine, Symbol::GlutamicAcid]);
        assert_eq!(config.default_sequence_length, 3);
        assert_eq!(config.reward.charge_penalty, -2.5);
        assert_eq!(config.reward.reward_per_motif, crate::constants::REWARD_PER_MOTIF);
    }

    #[test]
    fn rejects_bad_bounds() {
        let err = EnvConfig::from_json_str(r#"{ "default_motif": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(EnvError::InvalidConfig(_))));

        let err = EnvConfig::from_json_str(r#"{ "default_sequence_length": 26 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(EnvError::InvalidConfig(_))));

        let err = EnvConfig::from_json_str(r#"{ "reward": { "partial_credit_divisor": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EnvConfig::from_json_str(r#"{ "default_motif": ["SELENOCYSTEINE"] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unregistered_env_name() {
        let err = EnvConfig::from_json_str(r#"{ "env_name": "CartPole-v1" }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(EnvError::UnknownEnvId(ref id)) if id == "CartPole-v1"
        ));

        let config = EnvConfig {
            env_name: "Protein-Design-v1".into(),
            ..EnvConfig::default()
        };
        assert!(matches!(
            crate::ProteinDesignEnv::from_config(config),
            Err(EnvError::UnknownEnvId(_))
        ));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.json");
        assert_eq!(load(path).unwrap(), EnvConfig::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load("/nonexistent/protein-design.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("protein-design-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{ "variable_length": true }"#).unwrap();
        let config = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.variable_length);
    }
}
