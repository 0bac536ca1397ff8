use serde::Deserialize;

use crate::constants::ENV_ID;
use crate::design::ProteinDesignEnv;
use crate::env::EnvError;

/// Named options accepted by [`make`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MakeOptions {
    pub seed: u64,
    pub change_motif_at_each_episode: bool,
    pub change_sequence_length_at_each_episode: bool,
}

/// Ids [`make`] understands.
pub fn registered() -> &'static [&'static str] {
    &[ENV_ID]
}

/// Builds the environment registered under `id`.
///
/// `options` is a JSON object (or `null`) with the fields of [`MakeOptions`].
pub fn make(id: &str, options: serde_json::Value) -> Result<ProteinDesignEnv, EnvError> {
    if id != ENV_ID {
        return Err(EnvError::UnknownEnvId(id.to_string()));
    }
    let options: MakeOptions = if options.is_null() {
        MakeOptions::default()
    } else {
        serde_json::from_value(options)?
    };
    Ok(ProteinDesignEnv::new(
        options.seed,
        options.change_motif_at_each_episode,
        options.change_sequence_length_at_each_episode,
    ))
}
