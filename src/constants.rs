use crate::symbols::{NUM_SYMBOLS, Symbol};

/// Name under which the environment is registered.
pub const ENV_ID: &str = "Protein-Design-v0";

pub const MIN_MOTIF_LENGTH: usize = 2;
pub const MAX_MOTIF_LENGTH: usize = 4;

pub const MIN_SEQUENCE_LENGTH: usize = 15;
pub const MAX_SEQUENCE_LENGTH: usize = 25;

/// Motif used when motifs are not redrawn every episode. Three positive charges.
pub const DEFAULT_MOTIF: [Symbol; 3] = [Symbol::Arginine, Symbol::Lysine, Symbol::Arginine];
pub const DEFAULT_SEQUENCE_LENGTH: usize = 20;

pub const REWARD_PER_MOTIF: f64 = 1.0;
pub const CHARGE_PENALTY: f64 = -1.0;
/// Each motif symbol found in the sequence is worth `1 / (divisor * motif_len)`.
pub const PARTIAL_CREDIT_DIVISOR: f64 = 5.0;

/// Padded sequence, sequence length, padded motif, target length, charge.
pub const OBS_SIZE: usize = MAX_SEQUENCE_LENGTH + 1 + MAX_MOTIF_LENGTH + 1 + 1;

/// Largest magnitude any observation element can take.
pub const OBS_BOUND: usize = max(max(MAX_SEQUENCE_LENGTH, MAX_MOTIF_LENGTH), NUM_SYMBOLS);

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

const _: () = {
    assert!(MIN_MOTIF_LENGTH >= 1);
    assert!(MIN_MOTIF_LENGTH <= MAX_MOTIF_LENGTH);
    assert!(MIN_SEQUENCE_LENGTH >= 1);
    assert!(MIN_SEQUENCE_LENGTH <= MAX_SEQUENCE_LENGTH);
    assert!(DEFAULT_MOTIF.len() <= MAX_MOTIF_LENGTH);
    assert!(DEFAULT_SEQUENCE_LENGTH >= MIN_SEQUENCE_LENGTH);
    assert!(DEFAULT_SEQUENCE_LENGTH <= MAX_SEQUENCE_LENGTH);
    // |charge| <= sequence length, so the charge stays inside the observation bound.
    assert!(MAX_SEQUENCE_LENGTH <= OBS_BOUND);
    assert!(NUM_SYMBOLS <= u8::MAX as usize);
};
