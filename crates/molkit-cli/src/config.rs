use crate::cli::OptimizeArgs;
use crate::error::{CliError, Result};
use molkit::core::forcefield::params::RelaxationParams;
use molkit::engine::config::{EditorConfig, EditorConfigBuilder, validate_relaxation};
use molkit::workflows::relax::RelaxConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOptimizationConfig {
    iterations: Option<usize>,
    #[serde(rename = "bond-edit-iterations")]
    bond_edit_iterations: Option<usize>,
    center: Option<bool>,
}

/// The optional TOML configuration file shared by the editing commands.
///
/// ```toml
/// [relaxation]
/// spring-constant = 0.2
/// damping = 0.85
///
/// [optimization]
/// iterations = 100
/// bond-edit-iterations = 20
/// center = true
/// ```
///
/// Omitted keys keep their library defaults; command-line flags win over the file.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    relaxation: Option<RelaxationParams>,
    optimization: Option<PartialOptimizationConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path` if given, otherwise starts from an empty configuration.
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_optimize_args(self, args: &OptimizeArgs) -> Result<RelaxConfig> {
        let opt_config = self.optimization.unwrap_or_default();
        let mut params = self.relaxation.unwrap_or_default();
        if let Some(k) = args.spring_constant {
            params.spring_constant = k;
        }
        validate_relaxation(&params)?;

        let defaults = RelaxConfig::default();
        Ok(RelaxConfig {
            iterations: args
                .iterations
                .or(opt_config.iterations)
                .unwrap_or(defaults.iterations),
            params,
            center: !args.no_center && opt_config.center.unwrap_or(defaults.center),
        })
    }

    pub fn into_editor_config(self) -> Result<EditorConfig> {
        let opt_config = self.optimization.unwrap_or_default();
        let mut builder =
            EditorConfigBuilder::new().relaxation(self.relaxation.unwrap_or_default());
        if let Some(iterations) = opt_config.bond_edit_iterations {
            builder = builder.bond_edit_iterations(iterations);
        }
        if let Some(iterations) = opt_config.iterations {
            builder = builder.optimize_iterations(iterations);
        }
        Ok(builder.build()?)
    }
}
