use std::ops::{Deref, Range};

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_MOTIF_LENGTH, MAX_SEQUENCE_LENGTH, OBS_BOUND, OBS_SIZE};
use crate::design::sequence::{Motif, Sequence};
use crate::env::ObservationSpace;

pub const SEQUENCE_REGION: Range<usize> = 0..MAX_SEQUENCE_LENGTH;
pub const SEQUENCE_LENGTH_INDEX: usize = MAX_SEQUENCE_LENGTH;
pub const MOTIF_REGION: Range<usize> = SEQUENCE_LENGTH_INDEX + 1..SEQUENCE_LENGTH_INDEX + 1 + MAX_MOTIF_LENGTH;
pub const TARGET_LENGTH_INDEX: usize = MOTIF_REGION.end;
pub const CHARGE_INDEX: usize = TARGET_LENGTH_INDEX + 1;

const _: () = assert!(CHARGE_INDEX + 1 == OBS_SIZE);

/// Flat observation vector of `OBS_SIZE` elements:
/// padded sequence, sequence length, padded motif, target length, charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation(Vec<f64>);

impl Observation {
    pub fn encode(sequence: &Sequence, motif: &Motif, target_length: usize, charge: i32) -> Self {
        let mut values = Vec::with_capacity(OBS_SIZE);
        values.extend(sequence.padded_ids().map(f64::from));
        values.push(sequence.len() as f64);
        values.extend(motif.padded_ids().map(f64::from));
        values.push(target_length as f64);
        values.push(f64::from(charge));
        debug_assert_eq!(values.len(), OBS_SIZE);
        Self(values)
    }

    pub fn space() -> ObservationSpace {
        ObservationSpace::symmetric(OBS_BOUND as f64, OBS_SIZE)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    pub fn padded_sequence(&self) -> &[f64] {
        &self.0[SEQUENCE_REGION]
    }

    pub fn sequence_length(&self) -> f64 {
        self.0[SEQUENCE_LENGTH_INDEX]
    }

    pub fn padded_motif(&self) -> &[f64] {
        &self.0[MOTIF_REGION]
    }

    pub fn target_length(&self) -> f64 {
        self.0[TARGET_LENGTH_INDEX]
    }

    pub fn charge(&self) -> f64 {
        self.0[CHARGE_INDEX]
    }
}

impl Deref for Observation {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Observation> for Vec<f64> {
    fn from(obs: Observation) -> Self {
        obs.0
    }
}
