//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use triage_engine::RuleSet;

use crate::cli::Cli;

/// Triage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Classification rules
    #[serde(default)]
    pub rules: RuleSet,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TriageConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &Path, cli: &Cli) -> anyhow::Result<Self> {
        // Missing file means defaults
        let mut config = if config_path.exists() {
            Self::from_yaml(&std::fs::read_to_string(config_path)?)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(rules) = &cli.rules {
            config.rules = RuleSet::from_file(rules)?;
        }

        if cli.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }

    /// Parse and check a YAML configuration
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.rules.check()?;
        Ok(config)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit logs as JSON lines
    #[serde(default)]
    pub json: bool,

    /// `EnvFilter` directives, used when neither `--verbose` nor `RUST_LOG` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}
