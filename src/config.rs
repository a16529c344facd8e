//! Run configuration.
//!
//! A run is fully described by a [`RunConfig`]. Values come from built-in
//! defaults, optionally replaced by a YAML file, optionally replaced again
//! by command-line overrides.

use std::fs::File;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::ned::writer::{GateHeader, DEFAULT_OUTPUT_FILE};
use crate::topology::generator::DEFAULT_SEED;
use crate::topology::types::{GateCounts, DEFAULT_INPUT_GATES, DEFAULT_OUTPUT_GATES};

/// Node count used when none is given
pub const DEFAULT_NUM_NODES: usize = 20;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid gate configuration: {kind} gate count must be at least 1")]
    NoGates { kind: &'static str },
    #[error("Invalid output configuration: output path is empty")]
    EmptyOutput,
}

/// Everything needed to generate and write one network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub num_nodes: usize,
    pub input_gates: u32,
    pub output_gates: u32,
    pub seed: u32,
    pub output: PathBuf,
    pub gate_header: GateHeader,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            input_gates: DEFAULT_INPUT_GATES,
            output_gates: DEFAULT_OUTPUT_GATES,
            seed: DEFAULT_SEED,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            gate_header: GateHeader::default(),
        }
    }
}

impl RunConfig {
    /// Gate counts edges are drawn with
    pub fn gates(&self) -> GateCounts {
        GateCounts::new(self.input_gates, self.output_gates)
    }

    /// Gate counts written into the module header
    pub fn declared_gates(&self) -> GateCounts {
        self.gate_header.declared(self.gates())
    }

    /// Reject configurations the generator cannot honor.
    ///
    /// Zero or one node is fine; it simply produces no edges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_gates == 0 {
            return Err(ConfigError::NoGates { kind: "input" });
        }
        if self.output_gates == 0 {
            return Err(ConfigError::NoGates { kind: "output" });
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutput);
        }
        Ok(())
    }
}

/// Command-line values that replace configuration settings when present
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub num_nodes: Option<usize>,
    pub input_gates: Option<u32>,
    pub output_gates: Option<u32>,
    pub seed: Option<u32>,
    pub output: Option<PathBuf>,
    pub parametric_gates: bool,
}

/// Apply CLI overrides on top of a configuration and re-validate it
pub fn apply_overrides(config: &mut RunConfig, overrides: &CliOverrides) -> Result<(), ConfigError> {
    if let Some(num_nodes) = overrides.num_nodes {
        config.num_nodes = num_nodes;
    }
    if let Some(inputs) = overrides.input_gates {
        config.input_gates = inputs;
    }
    if let Some(outputs) = overrides.output_gates {
        config.output_gates = outputs;
    }
    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(output) = &overrides.output {
        config.output = output.clone();
    }
    if overrides.parametric_gates {
        config.gate_header = GateHeader::Parametric;
    }

    config.validate()
}

/// Load and validate a configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<RunConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;
    let config: RunConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;
    debug!("Loaded configuration: {:?}", config);

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.num_nodes, 20);
        assert_eq!(config.gates(), GateCounts::new(1, 2));
        assert_eq!(config.seed, 12345);
        assert_eq!(config.output, PathBuf::from("RandomNetwork.ned"));
        assert_eq!(config.gate_header, GateHeader::Fixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
num_nodes: 8
output_gates: 3
gate_header: parametric
"#;
        let config: RunConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.num_nodes, 8);
        assert_eq!(config.input_gates, 1);
        assert_eq!(config.output_gates, 3);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.declared_gates(), GateCounts::new(1, 3));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<RunConfig, _> = serde_yaml::from_str("edge_probability: 0.5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_gates_rejected() {
        let config = RunConfig {
            input_gates: 0,
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoGates { kind: "input" })));

        let config = RunConfig {
            output_gates: 0,
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoGates { kind: "output" })));
    }

    #[test]
    fn test_small_node_counts_valid() {
        for num_nodes in [0, 1] {
            let config = RunConfig {
                num_nodes,
                ..RunConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_overrides() {
        let mut config = RunConfig::default();
        let overrides = CliOverrides {
            num_nodes: Some(5),
            seed: Some(7),
            output: Some(PathBuf::from("out.ned")),
            parametric_gates: true,
            ..CliOverrides::default()
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert_eq!(config.num_nodes, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.output, PathBuf::from("out.ned"));
        assert_eq!(config.gate_header, GateHeader::Parametric);
        assert_eq!(config.input_gates, 1);
    }

    #[test]
    fn test_override_revalidates() {
        let mut config = RunConfig::default();
        let overrides = CliOverrides {
            output_gates: Some(0),
            ..CliOverrides::default()
        };
        assert!(apply_overrides(&mut config, &overrides).is_err());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_nodes: 3\nseed: 42\noutput: tiny.ned").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.num_nodes, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(config.output, PathBuf::from("tiny.ned"));
    }

    #[test]
    fn test_load_config_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "input_gates: 0").unwrap();
        assert!(load_config(file.path()).is_err());
    }
}
