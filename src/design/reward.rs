use serde::{Deserialize, Serialize};

use crate::constants::{CHARGE_PENALTY, PARTIAL_CREDIT_DIVISOR, REWARD_PER_MOTIF};
use crate::symbols::{Symbol, charge_of};

/// Tunable reward constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Paid whenever the motif appears contiguously and in order.
    pub reward_per_motif: f64,
    /// Added at the terminal step when the net charge is not zero.
    pub charge_penalty: f64,
    /// Denominator factor of the partial credit, `1 / (divisor * motif_len)`.
    pub partial_credit_divisor: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            reward_per_motif: REWARD_PER_MOTIF,
            charge_penalty: CHARGE_PENALTY,
            partial_credit_divisor: PARTIAL_CREDIT_DIVISOR,
        }
    }
}

/// Breakdown of a single step's reward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RewardComponents {
    pub motif_bonus: f64,
    pub partial_credit: f64,
    pub charge_penalty: f64,
}

impl RewardComponents {
    pub fn total(&self) -> f64 {
        self.charge_penalty + self.motif_bonus + self.partial_credit
    }
}

/// True if some contiguous window of `sequence` equals `motif` element for element.
pub fn contains_motif(sequence: &[Symbol], motif: &[Symbol]) -> bool {
    if motif.is_empty() || sequence.len() < motif.len() {
        return false;
    }
    sequence.windows(motif.len()).any(|window| window == motif)
}

/// Credit for motif positions whose symbol occurs anywhere in `sequence`.
///
/// Order is ignored. A symbol repeated in the motif is credited once per position.
pub fn partial_credit(sequence: &[Symbol], motif: &[Symbol], divisor: f64) -> f64 {
    if motif.is_empty() {
        return 0.0;
    }
    let per_symbol = 1.0 / (divisor * motif.len() as f64);
    motif
        .iter()
        .filter(|symbol| sequence.contains(*symbol))
        .map(|_| per_symbol)
        .sum()
}

/// Reward for `sequence` as it stands after a step.
///
/// The motif bonus and the partial credit are exclusive. The charge penalty
/// only applies once the sequence has reached `target_length`.
pub fn compute(
    sequence: &[Symbol],
    motif: &[Symbol],
    target_length: usize,
    config: &RewardConfig,
) -> RewardComponents {
    let matched = contains_motif(sequence, motif);
    let motif_coeff = if matched { 1.0 } else { 0.0 };
    let partial = if matched {
        0.0
    } else {
        partial_credit(sequence, motif, config.partial_credit_divisor)
    };

    let terminal = sequence.len() >= target_length;
    let charge_penalty = if terminal && charge_of(sequence) != 0 {
        config.charge_penalty
    } else {
        0.0
    };

    RewardComponents {
        motif_bonus: config.reward_per_motif * motif_coeff,
        partial_credit: partial,
        charge_penalty,
    }
}
