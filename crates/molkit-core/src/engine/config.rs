use super::history::DEFAULT_HISTORY_CAPACITY;
use super::layout::DEFAULT_OPTIMIZE_ITERATIONS;
use crate::core::forcefield::params::RelaxationParams;
use thiserror::Error;

/// Iterations of relaxation run after a bond is added or removed.
pub const DEFAULT_BOND_EDIT_ITERATIONS: usize = 10;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings for an interactive editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Snapshots kept by the undo history.
    pub history_capacity: usize,
    /// Relaxation steps after a bond edit.
    pub bond_edit_iterations: usize,
    /// Relaxation steps for an explicit optimize request.
    pub optimize_iterations: usize,
    pub relaxation: RelaxationParams,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            bond_edit_iterations: DEFAULT_BOND_EDIT_ITERATIONS,
            optimize_iterations: DEFAULT_OPTIMIZE_ITERATIONS,
            relaxation: RelaxationParams::default(),
        }
    }
}

#[derive(Default)]
pub struct EditorConfigBuilder {
    history_capacity: Option<usize>,
    bond_edit_iterations: Option<usize>,
    optimize_iterations: Option<usize>,
    relaxation: Option<RelaxationParams>,
}

impl EditorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }
    pub fn bond_edit_iterations(mut self, iterations: usize) -> Self {
        self.bond_edit_iterations = Some(iterations);
        self
    }
    pub fn optimize_iterations(mut self, iterations: usize) -> Self {
        self.optimize_iterations = Some(iterations);
        self
    }
    pub fn relaxation(mut self, params: RelaxationParams) -> Self {
        self.relaxation = Some(params);
        self
    }

    pub fn build(self) -> Result<EditorConfig, ConfigError> {
        let defaults = EditorConfig::default();

        let history_capacity = self.history_capacity.unwrap_or(defaults.history_capacity);
        if history_capacity == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "history_capacity",
                reason: "must be at least 1".to_string(),
            });
        }

        let relaxation = self.relaxation.unwrap_or(defaults.relaxation);
        validate_relaxation(&relaxation)?;

        Ok(EditorConfig {
            history_capacity,
            bond_edit_iterations: self
                .bond_edit_iterations
                .unwrap_or(defaults.bond_edit_iterations),
            optimize_iterations: self
                .optimize_iterations
                .unwrap_or(defaults.optimize_iterations),
            relaxation,
        })
    }
}

/// Rejects relaxation parameters that would make the integrator meaningless.
pub fn validate_relaxation(params: &RelaxationParams) -> Result<(), ConfigError> {
    let positive = [
        ("time_step", params.time_step),
        ("min_distance", params.min_distance),
        ("cutoff", params.cutoff),
        ("lj_sigma", params.lj_sigma),
    ];
    for (name, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name,
                reason: format!("expected a positive number, got {value}"),
            });
        }
    }

    let non_negative = [
        ("spring_constant", params.spring_constant),
        ("lj_epsilon", params.lj_epsilon),
    ];
    for (name, value) in non_negative {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name,
                reason: format!("expected a non-negative number, got {value}"),
            });
        }
    }

    if !(0.0..=1.0).contains(&params.damping) {
        return Err(ConfigError::InvalidParameter {
            name: "damping",
            reason: format!("expected a value in [0, 1], got {}", params.damping),
        });
    }

    Ok(())
}
