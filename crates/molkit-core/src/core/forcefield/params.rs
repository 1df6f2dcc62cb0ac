use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Constants of the geometry relaxation model.
///
/// The defaults describe a soft spring on every bond plus a Lennard-Jones term between
/// non-bonded pairs, integrated with a damped semi-implicit Euler step. Every field can
/// be overridden from a TOML file with kebab-case keys; omitted keys keep their default.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RelaxationParams {
    /// Spring constant of the bonded term.
    pub spring_constant: f64,
    /// Lennard-Jones well depth.
    pub lj_epsilon: f64,
    /// Lennard-Jones length scale.
    pub lj_sigma: f64,
    /// Pairs closer than this exert no force on each other.
    pub min_distance: f64,
    /// Non-bonded pairs at or beyond this distance are skipped.
    pub cutoff: f64,
    pub time_step: f64,
    /// Velocity retention factor applied every step.
    pub damping: f64,
}

impl Default for RelaxationParams {
    fn default() -> Self {
        Self {
            spring_constant: 0.1,
            lj_epsilon: 0.1,
            lj_sigma: 3.0,
            min_distance: 0.01,
            cutoff: 5.0,
            time_step: 0.1,
            damping: 0.9,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl RelaxationParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
