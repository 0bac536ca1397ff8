use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::constants::ENV_ID;
use crate::design::ProteinDesignEnv;
use crate::env::EnvError;
use crate::registry;
use crate::symbols::Symbol;

type PyInfo = HashMap<String, f64>;

fn value_error(err: EnvError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python-facing wrapper around the sequence-design environment.
#[pyclass(name = "ProteinDesignEnv")]
struct PyProteinDesignEnv {
    inner: ProteinDesignEnv,
}

#[pymethods]
impl PyProteinDesignEnv {
    #[new]
    #[pyo3(signature = (seed=0, change_motif_at_each_episode=false, change_sequence_length_at_each_episode=false))]
    fn new(
        seed: u64,
        change_motif_at_each_episode: bool,
        change_sequence_length_at_each_episode: bool,
    ) -> Self {
        Self {
            inner: ProteinDesignEnv::new(
                seed,
                change_motif_at_each_episode,
                change_sequence_length_at_each_episode,
            ),
        }
    }

    #[pyo3(signature = (seed=None))]
    fn reset(&mut self, seed: Option<u64>) -> (Vec<f64>, PyInfo) {
        let (obs, _info) = self.inner.reset(seed, None);
        (obs.into_inner(), PyInfo::new())
    }

    /// Raises `ValueError` for actions outside `0..20`.
    fn step(&mut self, action: i64) -> PyResult<(Vec<f64>, f64, bool, bool, PyInfo)> {
        let (obs, reward, terminated, truncated, _info) =
            self.inner.step(action).map_err(value_error)?;
        Ok((obs.into_inner(), reward, terminated, truncated, PyInfo::new()))
    }

    #[getter]
    fn state(&self) -> Vec<u8> {
        self.inner.sequence().iter().map(|s| s.id()).collect()
    }

    #[getter]
    fn motif(&self) -> Vec<u8> {
        self.inner.motif().iter().map(|s| s.id()).collect()
    }

    #[getter]
    fn sequence_length(&self) -> usize {
        self.inner.target_length()
    }

    #[getter]
    fn charge(&self) -> i32 {
        self.inner.charge()
    }
}

#[pyfunction]
#[pyo3(signature = (env_id, seed=0, change_motif_at_each_episode=false, change_sequence_length_at_each_episode=false))]
fn make(
    env_id: &str,
    seed: u64,
    change_motif_at_each_episode: bool,
    change_sequence_length_at_each_episode: bool,
) -> PyResult<PyProteinDesignEnv> {
    let options = serde_json::json!({
        "seed": seed,
        "change_motif_at_each_episode": change_motif_at_each_episode,
        "change_sequence_length_at_each_episode": change_sequence_length_at_each_episode,
    });
    let inner = registry::make(env_id, options).map_err(value_error)?;
    Ok(PyProteinDesignEnv { inner })
}

/// Symbol names indexed by `id - 1`.
#[pyfunction]
fn symbol_names() -> Vec<&'static str> {
    Symbol::ALL.iter().map(|s| s.name()).collect()
}

/// The name of this function must match the lib.name in Cargo.toml
#[pymodule]
fn protein_design(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyProteinDesignEnv>()?;
    m.add_function(wrap_pyfunction!(make, m)?)?;
    m.add_function(wrap_pyfunction!(symbol_names, m)?)?;
    m.add("ENV_ID", ENV_ID)?;
    Ok(())
}
